//! Error handling.

use std::fmt;

/// Error carrying a human readable message, shown as-is in the UI.
#[derive(Debug)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("IO error: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {err}"))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new("HTTP error: the central service did not answer in time")
        } else {
            Self::new(format!("HTTP error: {err}"))
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! simple_error {
    ($msg:literal) => {
        $crate::utils::error::Error::new($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::utils::error::Error::new(format!($fmt, $($arg)*))
    };
}
