use reqwest::StatusCode;
use thiserror::Error;

/// Problems with the run's inputs. Always raised before any request is sent.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Input \"{0}\" is required")]
    MissingInput(&'static str),

    #[error("Format of \"max-artifacts\" is wrong: {0:?} is not an integer")]
    InvalidThreshold(String),

    #[error("Format of \"max-artifacts\" is wrong: {0:?} is negative")]
    NegativeThreshold(String),

    #[error("Repository {0:?} is not of the form owner/name")]
    InvalidRepository(String),

    #[error("Invalid API URL {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error("Call to API was not successful (Code: {status})")]
    ListFailed { status: StatusCode },

    #[error("Deletion request was not successful for artifact {name} (Code: {status})")]
    DeleteFailed { name: String, status: StatusCode },

    #[error("Request to API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl Error {
    /// Status code returned by the API, when the failure came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ListFailed { status } | Error::DeleteFailed { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            Error::Configuration(_) | Error::MalformedResponse(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
