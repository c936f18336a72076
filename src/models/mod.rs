//! Data models exchanged with the JSONPlaceholder API.

mod post;
mod user;

pub use post::{NewPost, Post, PostUpdate};
pub use user::{Address, User};

use serde::{Deserialize, Deserializer};

/// Identifier of a user or post as assigned by the server.
pub type Id = u64;

/// Helper to deserialize an id sent either as an integer or as a numeric string.
///
/// The API echoes back whatever type was posted, so `"userId": "3"` and
/// `"userId": 3` must both decode.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<Id, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Id;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a non-negative integer or numeric string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<Id, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Id, E>
        where
            E: de::Error,
        {
            u64::try_from(value).map_err(|_| E::custom(format!("negative id: {}", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<Id, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid id: {:?}", value)))
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_id")]
        id: Id,
    }

    #[test]
    fn test_deserialize_id_integer() {
        let w: Wrapper = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(w.id, 42);
    }

    #[test]
    fn test_deserialize_id_string() {
        let w: Wrapper = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(w.id, 7);
    }

    #[test]
    fn test_deserialize_id_rejects_garbage() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"id": -1}"#).is_err());
    }
}
