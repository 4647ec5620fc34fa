use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while collecting match history.
#[derive(thiserror::Error, Debug)]
pub enum ArenaError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The match detail payload was not a JSON array of character records.
    #[error("failed to decode match details from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// The configured base URL is not a usable http(s) URL.
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl ArenaError {
    /// Whether this error came from talking to the remote site, as opposed to
    /// a local setup problem.
    pub fn is_remote_fetch(&self) -> bool {
        matches!(
            self,
            ArenaError::Http { .. }
                | ArenaError::UnexpectedStatus { .. }
                | ArenaError::ResponseBody { .. }
                | ArenaError::Decode { .. }
        )
    }
}

impl<'a> From<SelectorErrorKind<'a>> for ArenaError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        ArenaError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArenaError>;
