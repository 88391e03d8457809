//! Candidate records returned by the lookup service

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A Star Wars character as returned by SWAPI's `people` endpoint
///
/// Only `name` is required. The remaining attributes default to empty and are
/// skipped when displayed; a `null` or non-text attribute never rejects the
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub height: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mass: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hair_color: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub skin_color: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub eye_color: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub birth_year: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
}

impl Character {
    /// Create a character with only a name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height: String::new(),
            mass: String::new(),
            hair_color: String::new(),
            skin_color: String::new(),
            eye_color: String::new(),
            birth_year: String::new(),
            gender: String::new(),
        }
    }

    /// Labelled attributes in display order, omitting empty values
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        [
            ("Name", self.name.as_str()),
            ("Height", self.height.as_str()),
            ("Mass", self.mass.as_str()),
            ("Hair color", self.hair_color.as_str()),
            ("Skin color", self.skin_color.as_str()),
            ("Eye color", self.eye_color.as_str()),
            ("Birth year", self.birth_year.as_str()),
            ("Gender", self.gender.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

/// Accept any JSON value for a display attribute
///
/// Numbers and booleans keep their text; null, arrays and objects become empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

#[cfg(test)]
#[path = "character_tests.rs"]
mod character_tests;
