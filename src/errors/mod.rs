use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// The remote operation a failure belongs to; picks the fallback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Save,
    Delete,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch employees.",
            Operation::Save => "Failed to save employee.",
            Operation::Delete => "Failed to delete employee.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Fetch => write!(f, "fetching employees"),
            Operation::Save => write!(f, "saving the employee"),
            Operation::Delete => write!(f, "deleting the employee"),
        }
    }
}

/// Failures surfaced to the user as a blocking notification.
/// The `Display` text is the notification text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid employee ID.")]
    InvalidId,

    #[error("Error: {message}")]
    Rejected {
        op: Operation,
        status: StatusCode,
        message: String,
    },

    #[error("An unexpected error occurred while {op}.")]
    Transport {
        op: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl AppError {
    pub fn transport(op: Operation) -> impl FnOnce(reqwest::Error) -> AppError {
        move |source| AppError::Transport { op, source }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported API base URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    #[error("invalid API timeout {0:?}, expected a positive number of seconds")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_texts() {
        assert_eq!(AppError::InvalidId.to_string(), "Invalid employee ID.");

        let rejected = AppError::Rejected {
            op: Operation::Save,
            status: StatusCode::CONFLICT,
            message: Operation::Save.fallback_message().to_string(),
        };
        assert_eq!(rejected.to_string(), "Error: Failed to save employee.");
        assert_eq!(
            Operation::Delete.fallback_message(),
            "Failed to delete employee."
        );
        assert_eq!(Operation::Fetch.to_string(), "fetching employees");
    }
}
