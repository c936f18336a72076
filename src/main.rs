use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use postboard::adapters::ReqwestHttpClient;
use postboard::app::{App, AppMessage};
use postboard::cli::{parse_args, run_cli_command, CliOutcome};
use postboard::config::AppConfig;
use postboard::gateway::PlaceholderClient;
use postboard::logging::init_logging;
use postboard::terminal::{setup_panic_hook, TerminalManager};
use postboard::ui;

/// Spinner animation interval
const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let overrides = match run_cli_command(parse_args(std::env::args())) {
        CliOutcome::Exit(code) => std::process::exit(code),
        CliOutcome::Run(overrides) => overrides,
    };

    color_eyre::install()?;
    let config = AppConfig::from_env().with_overrides(&overrides);
    init_logging(&config)?;
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
    let client = PlaceholderClient::with_base_url(Arc::new(http), config.base_url.clone());

    let mut app = App::new(client);
    app.load_users();

    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    info!("postboard exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    // Take the receiver; select! needs ownership
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        debug!(code = ?key.code, modifiers = ?key.modifiers, "key");
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    // Input closed
                    None => app.quit(),
                }
            }

            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
