use std::fmt;

use crate::parser::ParseError;

/// Which of the two compared bodies an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The body the matcher was configured with, or an `expectedQuery` override.
    Expected,
    /// The body of the incoming request.
    Request,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Expected => f.write_str("expected"),
            Side::Request => f.write_str("request"),
        }
    }
}

/// The matcher error type
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    /// The body is not JSON, or is missing the `query` field
    #[error("invalid JSON format in the {side} body: {text}")]
    InvalidJsonFormat {
        side: Side,
        text: String,
        #[source]
        source: JsonFormatError,
    },
    /// The `query` field does not hold a valid GraphQL document
    #[error("invalid GraphQL query in the {side} body: {text}")]
    InvalidQueryFormat {
        side: Side,
        text: String,
        #[source]
        source: QueryFormatError,
    },
    /// The matcher configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MatcherError {
    pub fn side(&self) -> Option<Side> {
        match self {
            MatcherError::InvalidJsonFormat { side, .. } | MatcherError::InvalidQueryFormat { side, .. } => Some(*side),
            MatcherError::Config(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JsonFormatError {
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    #[error("unexpected request shape: {0}")]
    Shape(#[source] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum QueryFormatError {
    #[error("unexpected request shape: {0}")]
    Shape(#[source] serde_json::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("reading JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}
