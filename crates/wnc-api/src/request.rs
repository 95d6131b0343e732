// Outgoing request assembly.
//
// Every request carries the controller token in `Authorization` and asks
// for JSON back. Payloads are serialized before the request exists, so an
// unencodable payload never reaches the wire.

use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::error::Error;

/// Media type sent and accepted by the client.
pub const JSON: &str = "application/json";

/// Builds single-use `reqwest::Request`s against the pooled client.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    authorization: HeaderValue,
}

impl RequestBuilder {
    /// `token` is the pre-encoded basic credential (`base64(user:pass)`).
    pub fn new(token: &SecretString) -> Result<Self, Error> {
        let mut authorization =
            HeaderValue::from_str(&format!("Basic {}", token.expose_secret())).map_err(|e| {
                Error::InvalidConfiguration(format!("invalid token header value: {e}"))
            })?;
        authorization.set_sensitive(true);
        Ok(Self { authorization })
    }

    /// A request without a body (GET, DELETE).
    pub fn build(
        &self,
        http: &reqwest::Client,
        method: Method,
        url: Url,
    ) -> Result<reqwest::Request, Error> {
        http.request(method, url)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(ACCEPT, JSON)
            .build()
            .map_err(Error::Transport)
    }

    /// A request with a JSON body (POST, PUT, PATCH, RPC invocations).
    pub fn build_with_payload<P>(
        &self,
        http: &reqwest::Client,
        method: Method,
        url: Url,
        payload: &P,
    ) -> Result<reqwest::Request, Error>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload).map_err(Error::Serialization)?;
        http.request(method, url)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON)
            .body(body)
            .build()
            .map_err(Error::Transport)
    }
}
