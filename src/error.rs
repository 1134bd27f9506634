//! Error types for timetable fetching and parsing.

use thiserror::Error;

/// Errors that can occur while fetching or parsing a timetable page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimetableError {
    /// Network/HTTP request failed
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Client was configured with an unparseable base URL
    #[error("Invalid base URL: {message}")]
    InvalidUrl { message: String },

    /// An expected piece of markup is absent from the fetched page
    #[error("Malformed document: missing {element}")]
    MissingElement { element: &'static str },

    /// A course block carried a day label the lookup table does not know
    #[error("Unknown day label: {label:?}")]
    UnknownDayLabel { label: String },
}

impl TimetableError {
    /// Returns true if this error came from the transport layer rather than
    /// the page contents. Callers may choose to retry these; this crate
    /// never retries on its own.
    pub fn is_transport(&self) -> bool {
        matches!(self, TimetableError::Fetch { .. })
    }
}

impl From<reqwest::Error> for TimetableError {
    fn from(err: reqwest::Error) -> Self {
        TimetableError::Fetch {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for TimetableError {
    fn from(err: url::ParseError) -> Self {
        TimetableError::InvalidUrl {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transport_matches_fetch_only() {
        let fetch = TimetableError::Fetch {
            message: "connection timed out".to_string(),
        };
        assert!(fetch.is_transport());

        let invalid_url = TimetableError::InvalidUrl {
            message: "relative URL without a base".to_string(),
        };
        let missing = TimetableError::MissingElement {
            element: "main form (section.entry-content > form)",
        };
        let unknown = TimetableError::UnknownDayLabel {
            label: "Xyz".to_string(),
        };
        assert!(!invalid_url.is_transport());
        assert!(!missing.is_transport());
        assert!(!unknown.is_transport());
    }
}
