// Firmware compatibility adapters.
//
// Some IOS-XE releases fail reads of empty operational tables instead of
// returning an empty container: the connection drops mid-body, the body
// stops short of valid JSON, or the controller answers 5xx with a "table
// cursor" message. The endpoints known to do this route their results
// through `tolerate_empty_table`. The message list only covers failures
// seen so far.

use std::error::Error as StdError;
use std::io;

use tracing::warn;

use crate::error::Error;

const EMPTY_TABLE_MESSAGES: &[&str] = &["unexpected EOF", "failed to retrieve table cursor"];

fn mentions_empty_table(text: &str) -> bool {
    EMPTY_TABLE_MESSAGES.iter().any(|m| text.contains(m))
}

/// Whether `err` is one of the known empty-table firmware failures.
pub fn is_empty_table_failure(err: &Error) -> bool {
    match err {
        Error::Api(api) => mentions_empty_table(&api.message) || mentions_empty_table(&api.body),
        Error::Deserialization { source, .. } if source.is_eof() => true,
        other => {
            mentions_empty_table(&other.to_string()) || source_chain_hits_eof(other.source())
        }
    }
}

/// Walk a source chain looking for a premature end of stream.
fn source_chain_hits_eof(mut current: Option<&(dyn StdError + 'static)>) -> bool {
    while let Some(err) = current {
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                return true;
            }
        }
        if mentions_empty_table(&err.to_string()) {
            return true;
        }
        current = err.source();
    }
    false
}

/// Replace a known empty-table failure with an empty result.
pub fn tolerate_empty_table<T: Default>(endpoint: &str, result: Result<T, Error>) -> Result<T, Error> {
    match result {
        Err(err) if is_empty_table_failure(&err) => {
            warn!(endpoint, error = %err, "controller failed on empty table, returning empty result");
            Ok(T::default())
        }
        other => other,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn decode_error(body: &str) -> Error {
        let source = serde_json::from_str::<Vec<u8>>(body).unwrap_err();
        Error::Deserialization {
            message: format!("failed to unmarshal response: {source}"),
            body: body.into(),
            source,
        }
    }

    #[test]
    fn table_cursor_failure_becomes_empty() {
        let err = Error::Api(ApiError::new(
            500,
            "application error: failed to retrieve table cursor".into(),
        ));
        let out: Vec<u8> = tolerate_empty_table("sisf-db-mac", Err(err)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn truncated_json_becomes_empty() {
        let err = decode_error("[1, 2,");
        let out: Vec<u8> = tolerate_empty_table("lldp-neigh", Err(err)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_json_passes_through() {
        let err = decode_error("[1, }");
        let out: Result<Vec<u8>, _> = tolerate_empty_table("lldp-neigh", Err(err));
        assert!(matches!(out, Err(Error::Deserialization { .. })));
    }

    #[test]
    fn eof_in_source_chain_is_detected() {
        #[derive(Debug)]
        struct Wrapper(io::Error);

        impl std::fmt::Display for Wrapper {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("error reading a body from connection")
            }
        }

        impl StdError for Wrapper {
            fn source(&self) -> Option<&(dyn StdError + 'static)> {
                Some(&self.0)
            }
        }

        let outer = Wrapper(io::Error::new(io::ErrorKind::UnexpectedEof, "IncompleteBody"));
        assert!(source_chain_hits_eof(Some(&outer)));

        let refused = Wrapper(io::Error::from(io::ErrorKind::ConnectionRefused));
        assert!(!source_chain_hits_eof(Some(&refused)));
    }

    #[test]
    fn other_errors_pass_through() {
        let err = Error::Api(ApiError::new(500, r#"{"error":"x"}"#.into()));
        let out: Result<Vec<u8>, _> = tolerate_empty_table("lldp-neigh", Err(err));
        assert!(matches!(out, Err(Error::Api(ref e)) if e.status == 500));
    }

    #[test]
    fn success_passes_through() {
        let out = tolerate_empty_table("cdp-cache-data", Ok(vec![1_u8])).unwrap();
        assert_eq!(out, vec![1]);
    }
}
