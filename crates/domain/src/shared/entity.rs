use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

pub trait Entity {
    fn id(&self) -> &ID;
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Identifier of a stored record.
///
/// Ids are opaque strings so that records created by older clients, e.g.
/// `reminder-1700000000000` or `hearing-3`, stay addressable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ID(String);

impl ID {
    /// Creates an id of the form `<prefix>-<timestamp millis>-<random suffix>`
    pub fn with_prefix(prefix: &str, timestamp_millis: i64) -> Self {
        Self(format!(
            "{}-{}-{}",
            prefix,
            timestamp_millis,
            lembrete_utils::create_random_secret(6).to_lowercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn inner(self) -> String {
        self.0
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(InvalidIDError::Malformed(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for ID {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ID {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_the_timestamp() {
        let id = ID::with_prefix("reminder", 1_700_000_000_000);
        assert!(id.as_str().starts_with("reminder-1700000000000-"));
        assert_ne!(id, ID::with_prefix("reminder", 1_700_000_000_000));
    }

    #[test]
    fn parses_ids() {
        assert!("hearing-3".parse::<ID>().is_ok());
        assert!("".parse::<ID>().is_err());
        assert!("a b".parse::<ID>().is_err());
        assert!("a/b".parse::<ID>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ID::from("reminder-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"reminder-1\"");
    }
}
