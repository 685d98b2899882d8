use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("environment variable {var} is not set")]
    MissingEnv { var: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Why a classification attempt produced no result.
///
/// None of these are cached; resubmitting the same patent retries the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassificationFailure {
    /// The LLM request itself failed (network, auth, HTTP status).
    #[error("LLM call failed: {0}")]
    Call(String),

    /// The LLM answered, but the text was not a JSON classification object.
    #[error("LLM response was not valid JSON: {0}")]
    Parse(String),

    /// The reply was JSON, but not a classification object.
    #[error("LLM response is not a JSON object: got {0}")]
    Shape(String),

    /// Strict schema mode rejected a reply that lacked required fields.
    #[error("LLM response is missing fields: {}", .0.join(", "))]
    Schema(Vec<&'static str>),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Classification(#[from] ClassificationFailure),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
