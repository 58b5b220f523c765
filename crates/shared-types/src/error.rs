use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of configuration errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfigErrorKind {
    NotFound,
    Parse,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::NotFound => write!(f, "NotFound"),
            ConfigErrorKind::Parse => write!(f, "Parse"),
        }
    }
}

/// Error raised while loading the gallery configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigError {
    pub kind: ConfigErrorKind,
    pub message: String,
}

impl ConfigError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ConfigErrorKind::Parse,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ConfigError {}
