use thiserror::Error;

/// Failures of the redirect resolver. None of these abort a run: the
/// pipeline falls back to the unresolved URL.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The input could not be parsed as an absolute URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Connect or read deadline exceeded.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection refused, DNS failure and the like.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Redirect loop or too many hops.
    #[error("redirect failed: {0}")]
    Redirect(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ResolveError::Timeout(err.to_string())
        } else if err.is_connect() {
            ResolveError::Connect(err.to_string())
        } else if err.is_redirect() {
            ResolveError::Redirect(err.to_string())
        } else {
            ResolveError::Request(err.to_string())
        }
    }
}

/// Parse failures inside the normalization pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("URL parsing failed: {0}")]
    Parse(#[from] url::ParseError),

    /// The login page carried a `redirect_url` that is not an absolute URL.
    #[error("redirect_url is not a valid URL: {0}")]
    InvalidRedirect(String),
}
