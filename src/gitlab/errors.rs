/// Errors from the GitLab REST client layer.
use thiserror::Error;

/// Typed errors from fetching project variables.
#[derive(Debug, Error)]
pub enum GitLabError {
    /// The request URL could not be built from the API root and project path.
    #[error("Invalid API URL '{url}': {source}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Underlying parse error.
        source: url::ParseError,
    },

    /// The request could not be sent or no response was received.
    #[error("Request to GitLab failed: {0}")]
    Request(#[source] reqwest::Error),

    /// GitLab answered with anything other than `200 OK`.
    #[error("GitLab returned status code {status}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
    },

    /// The response body could not be read to the end.
    #[error("Failed to read GitLab response: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The body was not a JSON array of variable objects.
    #[error("Failed to decode GitLab response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GitLabError {
    /// HTTP status carried by this error, if GitLab answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}
