use reqwest::StatusCode;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RosterError {
    #[error("Please fill all fields")]
    IncompleteForm,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),

    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

/// The two outcomes a user can tell apart: a form that never left the client,
/// and everything that went wrong once a request was involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Request,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::IncompleteForm => ErrorKind::Validation,
            RosterError::UrlParse(_)
            | RosterError::Reqwest(_)
            | RosterError::Json(_)
            | RosterError::UpstreamStatus(_)
            | RosterError::Config(_) => ErrorKind::Request,
        }
    }
}

impl From<figment::Error> for RosterError {
    fn from(e: figment::Error) -> Self {
        RosterError::Config(Box::new(e))
    }
}
