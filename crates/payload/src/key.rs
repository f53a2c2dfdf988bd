use std::str::FromStr;

use serde::Serialize;

use crate::UnknownKey;

/// The single key of a payload object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKey {
    Message,
    App,
    Data,
}

impl PayloadKey {
    /// Returns the JSON key name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PayloadKey::Message => "message",
            PayloadKey::App => "app",
            PayloadKey::Data => "data",
        }
    }
}

impl FromStr for PayloadKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(PayloadKey::Message),
            "app" => Ok(PayloadKey::App),
            "data" => Ok(PayloadKey::Data),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

impl std::fmt::Display for PayloadKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_parses_its_own_name() {
        for key in [PayloadKey::Message, PayloadKey::App, PayloadKey::Data] {
            assert_eq!(key.as_str().parse::<PayloadKey>().unwrap(), key);
        }
    }

    #[test]
    fn key_rejects_unknown_name() {
        let err = "Message".parse::<PayloadKey>().unwrap_err();
        assert_eq!(err, UnknownKey("Message".to_string()));
    }

    #[test]
    fn key_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&PayloadKey::App).unwrap(), "\"app\"");
    }
}
