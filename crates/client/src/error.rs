//! Error types for the YNAB client.

use serde::Deserialize;

/// Result type for client operations.
pub type YnabResult<T> = Result<T, YnabError>;

/// Errors that can occur when talking to the YNAB API.
#[derive(Debug, thiserror::Error)]
pub enum YnabError {
    /// Invalid or missing configuration. Fatal at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// The API returned a non-2xx status. The status is preserved verbatim,
    /// including 429 rate limits; retrying is the caller's decision.
    #[error("YNAB API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    /// The request never produced an HTTP status: timeout, DNS failure,
    /// connection refused.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that was not the expected JSON envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The invocation referenced an undefined tool name.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Tool arguments failed schema validation.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

impl YnabError {
    /// Build an [`YnabError::Api`] from a status code and response body.
    ///
    /// YNAB wraps errors as `{"error": {"id", "name", "detail"}}`; the detail
    /// string is extracted when the body parses, otherwise the raw body is
    /// kept so nothing is swallowed.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::Api {
                status,
                detail: envelope.error.detail,
            },
            Err(_) => Self::Api {
                status,
                detail: body.to_string(),
            },
        }
    }

    /// The upstream HTTP status, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error envelope returned by the YNAB API.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub id: String,
    pub name: String,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_extracts_upstream_detail() {
        let body = r#"{"error":{"id":"401","name":"unauthorized","detail":"Unauthorized"}}"#;
        let err = YnabError::from_response(401, body);
        match err {
            YnabError::Api { status, detail } => {
                assert_eq!(status, 401);
                assert_eq!(detail, "Unauthorized");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn from_response_keeps_raw_body_when_unparseable() {
        let err = YnabError::from_response(502, "Bad Gateway");
        match err {
            YnabError::Api { status, detail } => {
                assert_eq!(status, 502);
                assert_eq!(detail, "Bad Gateway");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn status_is_present_only_for_api_errors() {
        assert_eq!(YnabError::from_response(429, "{}").status(), Some(429));
        assert_eq!(YnabError::Config("x".into()).status(), None);
        assert_eq!(YnabError::UnknownTool("x".into()).status(), None);
    }
}
