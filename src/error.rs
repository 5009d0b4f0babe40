use std::fmt;

#[derive(Debug)]
pub enum Error {
    Http(reqwest::Error),
    Json(serde_json::Error),
    Protocol(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP error: {e}"),
            Error::Json(e) => write!(f, "invalid JSON: {e}"),
            Error::Protocol(msg) => write!(f, "protocol error: {msg}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// What a failed request looked like from the transport's point of view:
/// HTTP status code and text when a response arrived, plus the underlying
/// error detail. Handed to the client's failure hook.
#[derive(Debug, Clone)]
pub struct FailureDetails {
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub detail: String,
}

impl FailureDetails {
    pub(crate) fn from_error(err: &Error) -> Self {
        let status = match err {
            Error::Http(e) => e.status(),
            _ => None,
        };
        Self {
            status: status.map(|s| s.as_u16()),
            status_text: status
                .and_then(|s| s.canonical_reason())
                .map(str::to_string),
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for FailureDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.status_text.as_deref()) {
            (Some(code), Some(text)) => write!(f, "server replied {code}: {text}"),
            (Some(code), None) => write!(f, "server replied {code}"),
            _ => write!(f, "{}", self.detail),
        }
    }
}
