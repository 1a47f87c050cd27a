// errors.rs
use std::error::Error;
use std::fmt;

/// Failures in the fetch layer. Unlike the text pipeline, which degrades
/// instead of erroring, any of these aborts the run.
#[derive(Debug)]
pub enum FetchError {
    Network(String),
    BadStatus(u16),
    MissingCookie,
    HtmlParse(String),
    MissingCsrfToken,
    Decode(String),
    ApiStatus(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {msg}"),
            FetchError::BadStatus(code) => write!(f, "Request to Bahnhof failed with HTTP {code}"),
            FetchError::MissingCookie => write!(f, "Failed to retrieve session cookie"),
            FetchError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            FetchError::MissingCsrfToken => write!(f, "Failed to extract CSRF token"),
            FetchError::Decode(msg) => write!(f, "Failed to decode body: {msg}"),
            FetchError::ApiStatus(status) => write!(f, "API returned an error (status: {status})"),
        }
    }
}

impl Error for FetchError {}
