use serde::{Deserialize, Serialize};

use super::{deserialize_id, Id};

/// Postal address of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

/// A user as returned by `GET /users`. Never mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    pub username: String,
    #[serde(default)]
    pub address: Address,
}

impl User {
    /// Address lines in display order.
    pub fn address_lines(&self) -> [&str; 4] {
        [
            &self.address.street,
            &self.address.suite,
            &self.address.city,
            &self.address.zipcode,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Bret");
        assert_eq!(
            user.address_lines(),
            ["Kulas Light", "Apt. 556", "Gwenborough", "92998-3874"]
        );
    }

    #[test]
    fn test_user_without_address() {
        let user: User = serde_json::from_str(r#"{"id": 2, "username": "Antonette"}"#).unwrap();
        assert_eq!(user.address, Address::default());
    }
}
