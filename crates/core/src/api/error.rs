use std::fmt;

/// Failure surfaced by the remote data client. Callers always receive one of
/// these; nothing escapes the client boundary as a panic.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// Transport failure or non-2xx HTTP status.
    Network {
        status: Option<u16>,
        detail: String,
    },
    /// The server answered 2xx but the envelope carried an `error` field or
    /// did not match the expected shape.
    Api { detail: String },
}

impl ClientError {
    pub fn network(detail: impl Into<String>) -> Self {
        ClientError::Network {
            status: None,
            detail: detail.into(),
        }
    }

    pub fn http_status(status: u16, detail: impl Into<String>) -> Self {
        ClientError::Network {
            status: Some(status),
            detail: detail.into(),
        }
    }

    pub fn api(detail: impl Into<String>) -> Self {
        ClientError::Api {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network {
                status: Some(status),
                detail,
            } => write!(f, "network error (HTTP {status}): {detail}"),
            ClientError::Network { status: None, detail } => {
                write!(f, "network error: {detail}")
            }
            ClientError::Api { detail } => write!(f, "api error: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network {
            status: err.status().map(|s| s.as_u16()),
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_when_known() {
        let err = ClientError::http_status(502, "bad gateway");
        assert_eq!(err.to_string(), "network error (HTTP 502): bad gateway");

        let err = ClientError::api("missing data field");
        assert_eq!(err.to_string(), "api error: missing data field");
    }
}
