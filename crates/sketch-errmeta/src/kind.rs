//! Error kinds and their HTTP status mapping

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of metadata error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Payload failed validation (422)
    BadData,
    /// Request was malformed (400)
    BadRequest,
}

impl ErrorKind {
    /// HTTP status code
    #[inline]
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadData => 422,
            Self::BadRequest => 400,
        }
    }

    /// HTTP reason phrase
    #[inline]
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::BadData => "Unprocessable Entity",
            Self::BadRequest => "Bad Request",
        }
    }

    /// Stable identifier
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadData => "bad_data",
            Self::BadRequest => "bad_request",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
