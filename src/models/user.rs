//! User record data models.
//!
//! This module defines:
//! - `UserRecord`: One entry of the user directory
//! - `HobbyRecord`: A hobby attached to a user, tagged with a free-form type

use serde::{Deserialize, Serialize};

/// Represents a single user in the directory.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Donald Duck",
///   "location": "NYC",
///   "occupation": ["dipping", "diving", "dodging"],
///   "hobbies": [
///     { "name": "Chilling", "type": "current" },
///     { "name": "swimming", "type": "past" }
///   ]
/// }
/// ```
///
/// Records have no identifier. A record is addressed only by its position in
/// the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name
    pub name: String,

    /// Free-text location (city, region)
    pub location: String,

    /// Occupations in chronological order
    ///
    /// The last element is the most recent one. Missing in JSON means empty.
    #[serde(default)]
    pub occupation: Vec<String>,

    /// Hobbies in the order they were listed
    #[serde(default)]
    pub hobbies: Vec<HobbyRecord>,
}

/// A hobby with an informal type tag.
///
/// The tag is not an enumeration. Observed values are `"current"` and
/// `"past"`, but any string is accepted and matched exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HobbyRecord {
    /// Hobby name
    pub name: String,

    /// Type tag, serialized as `type`
    #[serde(rename = "type")]
    pub kind: String,
}

impl UserRecord {
    /// Most recent occupation, if any.
    pub fn latest_occupation(&self) -> Option<&str> {
        self.occupation.last().map(String::as_str)
    }
}

impl HobbyRecord {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hobby_type_uses_json_key_type() {
        let hobby: HobbyRecord =
            serde_json::from_str(r#"{"name":"Chilling","type":"current"}"#).unwrap();
        assert_eq!(hobby, HobbyRecord::new("Chilling", "current"));

        let value = serde_json::to_value(&hobby).unwrap();
        assert_eq!(value["type"], "current");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn missing_sequences_default_to_empty() {
        let user: UserRecord =
            serde_json::from_str(r#"{"name":"Goofy","location":"Spoonerville"}"#).unwrap();
        assert!(user.occupation.is_empty());
        assert!(user.hobbies.is_empty());
        assert_eq!(user.latest_occupation(), None);
    }
}
