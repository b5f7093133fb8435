use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::PiecesColor;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub player_id: Option<String>,
    #[serde(default)]
    pub pieces_color: Option<PiecesColor>,
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every rule a request broke, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn single(field: &'static str, message: &'static str) -> Self {
        ValidationErrors(vec![FieldViolation { field, message }])
    }

    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldViolation { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Accepts `"88"`, `88` or `null` for an id field.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a string or an integer")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(IdVisitor)
        }
    }

    deserializer.deserialize_option(IdVisitor)
}

/// The value as sent, unless it is empty or only whitespace.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl CreateGameRequest {
    /// Player id with blank strings treated as missing.
    pub fn player_id(&self) -> Option<&str> {
        present(&self.player_id)
    }

    pub fn nickname(&self) -> Option<&str> {
        present(&self.nickname)
    }

    /// Checks field presence before anything is persisted.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.player_id().is_none() && self.nickname().is_none() {
            errors.add("playerId", "either playerId or nickname must be provided");
        }
        if self.pieces_color.is_none() {
            errors.add("piecesColor", "piecesColor is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
