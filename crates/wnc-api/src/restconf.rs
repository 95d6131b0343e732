// RESTCONF URL construction.
//
// Data resources live under `/restconf/data/<module>:<container>`, RPCs
// under `/restconf/operations/<module>:<rpc>`. List entries are selected
// by appending `=<key>` (or `=<k1>,<k2>,...` for composite keys) to the
// list path.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::Error;

/// Root of the RESTCONF data tree.
pub const DATA_ROOT: &str = "/restconf/data";

/// Root of the RESTCONF operations (RPC) namespace.
pub const OPERATIONS_ROOT: &str = "/restconf/operations";

/// URL scheme used to reach the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Protocol {
    #[default]
    Https,
    Http,
}

impl Protocol {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Https => "https",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "https" => Ok(Self::Https),
            "http" => Ok(Self::Http),
            other => Err(Error::InvalidConfiguration(format!(
                "unsupported protocol '{other}' (expected 'https' or 'http')"
            ))),
        }
    }
}

/// Builds RESTCONF URLs for a single controller.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    protocol: Protocol,
    host: String,
}

impl UrlBuilder {
    /// `host` may carry a port (`10.0.0.5:8443`) but no scheme or path.
    pub fn new(protocol: Protocol, host: impl Into<String>) -> Self {
        Self {
            protocol,
            host: host.into(),
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `scheme://host`
    pub fn base(&self) -> String {
        format!("{}://{}", self.protocol, self.host)
    }

    /// `scheme://host/restconf/data/<path>`
    pub fn data_url(&self, path: &str) -> Result<Url, Error> {
        self.join(DATA_ROOT, path)
    }

    /// `scheme://host/restconf/operations/<path>`
    pub fn rpc_url(&self, path: &str) -> Result<Url, Error> {
        self.join(OPERATIONS_ROOT, path)
    }

    fn join(&self, root: &str, path: &str) -> Result<Url, Error> {
        let path = path.trim_start_matches('/');
        let full = format!("{}{root}/{path}", self.base());
        Ok(Url::parse(&full)?)
    }

    /// Append a single-key list selector: `<base_path>=<key>`.
    pub fn build_query_url(&self, base_path: &str, key: &str) -> String {
        build_query_url(base_path, key)
    }

    /// Append a composite-key list selector: `<base_path>=<k1>,<k2>,...`.
    pub fn build_query_composite_url(&self, base_path: &str, keys: &[&str]) -> String {
        build_query_composite_url(base_path, keys)
    }
}

/// Append a single-key list selector: `<base_path>=<key>`.
///
/// No escaping is applied; callers pass well-formed keys.
pub fn build_query_url(base_path: &str, key: &str) -> String {
    format!("{base_path}={key}")
}

/// Append a composite-key list selector: `<base_path>=<k1>,<k2>,...`.
pub fn build_query_composite_url(base_path: &str, keys: &[&str]) -> String {
    format!("{base_path}={}", keys.join(","))
}
