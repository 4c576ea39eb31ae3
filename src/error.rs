use std::path::PathBuf;
use thiserror::Error;

/// The unified error type for the wastrel application
#[derive(Error, Debug)]
pub enum WastrelError {
    #[error("invalid {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("logging error: {message}")]
    Logging {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl WastrelError {
    /// Create an invalid-input error for a named argument
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a logging error tied to a sink path
    pub fn logging(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Logging {
            message: message.into(),
            path,
        }
    }

    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput { .. } => 2,
            Self::Config { .. } | Self::Logging { .. } | Self::Io { .. } => 1,
        }
    }
}

impl From<std::io::Error> for WastrelError {
    fn from(err: std::io::Error) -> Self {
        WastrelError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}
