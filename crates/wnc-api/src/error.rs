use std::fmt;

use thiserror::Error;

/// Top-level error type for the `wnc-api` crate.
///
/// Covers configuration, transport, HTTP status, and (de)serialization
/// failures. The sentinel variants are never raised from status codes by
/// the client itself; services and callers decide when to use them.
#[derive(Debug, Error)]
pub enum Error {
    // ── Sentinels ───────────────────────────────────────────────────
    /// Credentials were rejected by the controller.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The authenticated user lacks permission for the resource.
    #[error("access forbidden")]
    AccessForbidden,

    /// A lookup resolved to nothing.
    #[error("resource not found")]
    ResourceNotFound,

    /// Invalid host, token, or client option.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Request exceeded the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    RequestTimeout { timeout_secs: u64 },

    // ── Guards ──────────────────────────────────────────────────────
    /// A request helper was called without a client.
    #[error("client is nil")]
    NilClient,

    // ── HTTP status ─────────────────────────────────────────────────
    /// The controller answered with status >= 400.
    #[error(transparent)]
    Api(#[from] ApiError),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// The request payload could not be encoded as JSON.
    #[error("failed to marshal request payload: {0}")]
    Serialization(#[source] serde_json::Error),

    /// JSON decoding of a response failed, with the raw body for debugging.
    #[error("{message}")]
    Deserialization {
        message: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Input rejected by a validation helper.
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl Error {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` for 404 responses and the `ResourceNotFound` sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound) || self.status() == Some(404)
    }

    /// Returns `true` for 401 responses and the `AuthenticationFailed` sentinel.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::AuthenticationFailed) || self.status() == Some(401)
    }

    /// Returns `true` for 403 responses and the `AccessForbidden` sentinel.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::AccessForbidden) || self.status() == Some(403)
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Self::RequestTimeout { .. } => true,
            Self::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }
}

// ── API error ────────────────────────────────────────────────────────

/// A non-success HTTP response from the controller.
///
/// `body` is the raw response text. `message` is the first
/// `error-message` of a RESTCONF `ietf-restconf:errors` envelope when the
/// body carries one, otherwise the canonical reason phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub body: String,
}

impl ApiError {
    pub fn new(status: u16, body: String) -> Self {
        let message = restconf_error_message(&body).unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("unknown status")
                .to_owned()
        });
        Self {
            status,
            message,
            body,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error (HTTP {}): {}", self.status, self.message)?;
        if !self.body.is_empty() && !self.body.contains(&self.message) {
            write!(f, ": {}", preview(&self.body))?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[derive(serde::Deserialize)]
struct RestconfErrors {
    #[serde(rename = "ietf-restconf:errors")]
    errors: RestconfErrorList,
}

#[derive(serde::Deserialize)]
struct RestconfErrorList {
    #[serde(default)]
    error: Vec<RestconfErrorEntry>,
}

#[derive(serde::Deserialize)]
struct RestconfErrorEntry {
    #[serde(rename = "error-message")]
    message: Option<String>,
    #[serde(rename = "error-tag")]
    tag: Option<String>,
}

fn restconf_error_message(body: &str) -> Option<String> {
    let parsed: RestconfErrors = serde_json::from_str(body).ok()?;
    let first = parsed.errors.error.into_iter().next()?;
    first.message.or(first.tag)
}

/// First 200 bytes of a body, cut on a char boundary.
pub(crate) fn preview(body: &str) -> &str {
    if body.len() <= 200 {
        return body;
    }
    let mut end = 200;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

// ── Classification ───────────────────────────────────────────────────

/// Report whether `err` means "not found".
///
/// Walks the source chain looking for a 404 [`ApiError`] or
/// [`Error::ResourceNotFound`]. Errors that lost their structured type
/// along the way fall back to a case-insensitive match on `"404"` or
/// `"not found"` in the display string.
pub fn is_not_found_error(err: Option<&(dyn std::error::Error + 'static)>) -> bool {
    let Some(err) = err else {
        return false;
    };

    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(wnc) = e.downcast_ref::<Error>() {
            if wnc.is_not_found() {
                return true;
            }
        } else if let Some(api) = e.downcast_ref::<ApiError>() {
            if api.status == 404 {
                return true;
            }
        }
        current = e.source();
    }

    let text = err.to_string().to_lowercase();
    text.contains("404") || text.contains("not found")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn api_error_prefers_restconf_message() {
        let body = r#"{"ietf-restconf:errors":{"error":[{"error-type":"application","error-tag":"invalid-value","error-message":"uri keypath not found"}]}}"#;
        let err = ApiError::new(404, body.to_owned());
        assert_eq!(err.message, "uri keypath not found");
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn api_error_falls_back_to_reason_phrase() {
        let err = ApiError::new(500, r#"{"error":"x"}"#.to_owned());
        assert_eq!(err.message, "Internal Server Error");
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains(r#"{"error":"x"}"#));
    }

    #[test]
    fn not_found_matches_structured_errors() {
        let err = Error::Api(ApiError::new(404, String::new()));
        assert!(is_not_found_error(Some(&err)));
        assert!(is_not_found_error(Some(&Error::ResourceNotFound)));
        assert!(!is_not_found_error(Some(&Error::Api(ApiError::new(
            500,
            String::new()
        )))));
    }

    #[test]
    fn not_found_none_is_false() {
        assert!(!is_not_found_error(None));
    }

    #[test]
    fn not_found_falls_back_to_message() {
        let plain = std::io::Error::other("Resource Not Found on controller");
        assert!(is_not_found_error(Some(&plain)));

        let coded = std::io::Error::other("upstream said 404");
        assert!(is_not_found_error(Some(&coded)));

        let other = std::io::Error::other("connection reset");
        assert!(!is_not_found_error(Some(&other)));
    }

    #[test]
    fn not_found_walks_source_chain() {
        #[derive(Debug, Error)]
        #[error("fetching AP list")]
        struct Wrapped(#[source] Error);

        let err = Wrapped(Error::Api(ApiError::new(404, String::new())));
        assert!(is_not_found_error(Some(&err)));
    }

    #[test]
    fn status_helpers() {
        let err = Error::Api(ApiError::new(401, String::new()));
        assert!(err.is_unauthorized());
        assert!(!err.is_forbidden());
        assert_eq!(err.status(), Some(401));
        assert!(Error::AccessForbidden.is_forbidden());
        assert!(Error::RequestTimeout { timeout_secs: 5 }.is_timeout());
    }
}
