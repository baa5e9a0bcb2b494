use std::error::Error as StdError;

use thiserror::Error;

/// Why a single GET of a batch did not produce a response.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("{source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },
    #[error("{source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },
}

impl RequestError {
    #[must_use]
    pub fn from_reqwest(source: reqwest::Error) -> Self {
        if source.is_timeout() {
            RequestError::Timeout { source }
        } else {
            RequestError::Network { source }
        }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, RequestError::Timeout { .. })
    }

    /// Renders the error followed by every underlying cause, joined by `": "`.
    ///
    /// reqwest's own message ("error sending request for url ...") hides the
    /// DNS or connect failure underneath, so the chain is walked explicitly.
    #[must_use]
    pub fn describe(&self) -> String {
        let source = match self {
            RequestError::Timeout { source } | RequestError::Network { source } => source,
            RequestError::ClientBuild { .. } => return self.to_string(),
        };
        let mut message = source.to_string();
        let mut cause = source.source();
        while let Some(err) = cause {
            let text = err.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            cause = err.source();
        }
        message
    }
}
