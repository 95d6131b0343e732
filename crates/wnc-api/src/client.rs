// Controller client: owns the pooled transport and executes requests.
//
// The request primitives here return raw bytes; decoding into models is
// the job of the generic helpers in `helpers.rs`. All endpoint services
// are thin wrappers over those helpers.

use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{Instrument, Span, debug};
use url::Url;

use crate::error::{ApiError, Error, preview};
use crate::request::RequestBuilder;
use crate::restconf::{Protocol, UrlBuilder};
use crate::transport::{TlsMode, TransportConfig};

/// Async client for a single Cisco IOS-XE wireless controller.
///
/// Cheap to share behind an `Arc`; concurrent requests reuse the same
/// connection pool. Nothing is mutated after construction.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    urls: UrlBuilder,
    requests: RequestBuilder,
    timeout: Duration,
    span: Span,
}

impl Client {
    /// Build a client with default options (HTTPS, verified TLS, 60s timeout).
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Result<Self, Error> {
        Self::builder(host, token).build()
    }

    /// Start configuring a client.
    pub fn builder(host: impl Into<String>, token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(host.into(), SecretString::from(token.into()))
    }

    pub fn host(&self) -> &str {
        self.urls.host()
    }

    pub fn protocol(&self) -> Protocol {
        self.urls.protocol()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The URL builder bound to this controller.
    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    // ── Request primitives ───────────────────────────────────────────

    /// Send a body-less request to `/restconf/data/<path>`.
    pub async fn do_request(&self, method: Method, path: &str) -> Result<Bytes, Error> {
        let url = self.urls.data_url(path)?;
        let request = self.requests.build(&self.http, method, url)?;
        self.execute(request).instrument(self.span.clone()).await
    }

    /// Send `payload` as JSON to `/restconf/data/<path>`.
    pub async fn do_with_payload<P>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
    ) -> Result<Bytes, Error>
    where
        P: Serialize + ?Sized,
    {
        let url = self.urls.data_url(path)?;
        self.send_payload(method, url, payload).await
    }

    /// Send `payload` as JSON to `/restconf/operations/<rpc_path>`.
    pub async fn do_rpc_with_payload<P>(
        &self,
        method: Method,
        rpc_path: &str,
        payload: &P,
    ) -> Result<Bytes, Error>
    where
        P: Serialize + ?Sized,
    {
        let url = self.urls.rpc_url(rpc_path)?;
        self.send_payload(method, url, payload).await
    }

    async fn send_payload<P>(&self, method: Method, url: Url, payload: &P) -> Result<Bytes, Error>
    where
        P: Serialize + ?Sized,
    {
        let request = self
            .requests
            .build_with_payload(&self.http, method, url, payload)?;
        self.execute(request).instrument(self.span.clone()).await
    }

    // ── Execution ────────────────────────────────────────────────────

    async fn execute(&self, request: reqwest::Request) -> Result<Bytes, Error> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, path = url.path(), "sending request");

        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|e| self.transport_error(e))?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| self.transport_error(e))?;

        debug!(
            %method,
            path = url.path(),
            status = status.as_u16(),
            body_len = body.len(),
            "received response"
        );

        if status.as_u16() >= 400 {
            let text = String::from_utf8_lossy(&body).into_owned();
            debug!(
                %method,
                path = url.path(),
                status = status.as_u16(),
                body = preview(&text),
                "request failed"
            );
            return Err(ApiError::new(status.as_u16(), text).into());
        }

        Ok(body)
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::RequestTimeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(err)
        }
    }
}

// ── Builder ──────────────────────────────────────────────────────────

/// Configures a [`Client`].
///
/// Options apply in call order. The first invalid option is remembered
/// and reported by [`build`](Self::build); later options cannot clear it.
#[derive(Debug)]
pub struct ClientBuilder {
    host: String,
    token: SecretString,
    protocol: Protocol,
    transport: TransportConfig,
    span: Option<Span>,
    error: Option<Error>,
}

impl ClientBuilder {
    fn new(host: String, token: SecretString) -> Self {
        Self {
            host,
            token,
            protocol: Protocol::default(),
            transport: TransportConfig::default(),
            span: None,
            error: None,
        }
    }

    fn fail(&mut self, message: &str) {
        if self.error.is_none() {
            self.error = Some(Error::InvalidConfiguration(message.to_owned()));
        }
    }

    /// Overall request timeout. Must be positive.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        if timeout.is_zero() {
            self.fail("timeout must be positive");
        } else {
            self.transport.timeout = timeout;
        }
        self
    }

    /// Skip certificate verification (self-signed lab controllers).
    pub fn insecure_skip_verify(mut self, skip: bool) -> Self {
        if skip {
            self.transport.tls = TlsMode::DangerAcceptInvalid;
        } else if self.transport.tls == TlsMode::DangerAcceptInvalid {
            self.transport.tls = TlsMode::System;
        }
        self
    }

    /// Trust an additional CA certificate (PEM).
    pub fn ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.transport.tls = TlsMode::CustomCa(path.into());
        self
    }

    /// Span that every request log event is recorded under.
    ///
    /// `Span::none()` is rejected.
    pub fn logger(mut self, span: Span) -> Self {
        if span.is_none() {
            self.fail("logger cannot be nil");
        } else {
            self.span = Some(span);
        }
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        if user_agent.trim().is_empty() {
            self.fail("user agent cannot be empty");
        } else {
            self.transport.user_agent = user_agent;
        }
        self
    }

    /// `https` (default) or `http`.
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(Error::InvalidConfiguration("host cannot be empty".into()));
        }
        if host.contains("://") || host.contains('/') {
            return Err(Error::InvalidConfiguration(format!(
                "host '{host}' must not include a scheme or path"
            )));
        }
        if self.token.expose_secret().trim().is_empty() {
            return Err(Error::InvalidConfiguration("token cannot be empty".into()));
        }
        if let Some(err) = self.error {
            return Err(err);
        }

        let urls = UrlBuilder::new(self.protocol, host);
        Url::parse(&urls.base())
            .map_err(|e| Error::InvalidConfiguration(format!("invalid host '{host}': {e}")))?;

        let requests = RequestBuilder::new(&self.token)?;
        let http = self.transport.build_client()?;
        let span = self
            .span
            .unwrap_or_else(|| tracing::info_span!("wnc_client", host = %host));

        debug!(
            host,
            protocol = %self.protocol,
            timeout_secs = self.transport.timeout.as_secs(),
            "controller client ready"
        );

        Ok(Client {
            http,
            urls,
            requests,
            timeout: self.transport.timeout,
            span,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_message(err: &Error) -> &str {
        match err {
            Error::InvalidConfiguration(m) => m,
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn new_with_valid_host_and_token() {
        let client = Client::new("10.0.0.5", "dG9rZW4=").unwrap();
        assert_eq!(client.host(), "10.0.0.5");
        assert_eq!(client.protocol(), Protocol::Https);
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn empty_host_or_token_is_rejected() {
        for (host, token) in [("", "dG9rZW4="), ("   ", "dG9rZW4="), ("wnc", ""), ("wnc", " ")] {
            let err = Client::new(host, token).unwrap_err();
            assert!(matches!(err, Error::InvalidConfiguration(_)), "{host:?}/{token:?}");
        }
    }

    #[test]
    fn host_with_scheme_is_rejected() {
        let err = Client::new("https://wnc", "dG9rZW4=").unwrap_err();
        assert!(config_message(&err).contains("scheme"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Client::builder("wnc", "dG9rZW4=")
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(config_message(&err).contains("timeout must be positive"));
    }

    #[test]
    fn positive_timeouts_are_accepted() {
        for secs in [1, 30, 600] {
            let client = Client::builder("wnc", "dG9rZW4=")
                .timeout(Duration::from_secs(secs))
                .build()
                .unwrap();
            assert_eq!(client.timeout(), Duration::from_secs(secs));
        }
        let client = Client::builder("wnc", "dG9rZW4=")
            .timeout(Duration::from_millis(1))
            .build()
            .unwrap();
        assert_eq!(client.timeout(), Duration::from_millis(1));
    }

    #[test]
    fn none_logger_is_rejected() {
        let err = Client::builder("wnc", "dG9rZW4=")
            .logger(Span::none())
            .build()
            .unwrap_err();
        assert!(config_message(&err).contains("logger cannot be nil"));
    }

    #[test]
    fn first_failing_option_wins() {
        let err = Client::builder("wnc", "dG9rZW4=")
            .timeout(Duration::ZERO)
            .logger(Span::none())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap_err();
        assert!(config_message(&err).contains("timeout must be positive"));
    }

    #[test]
    fn insecure_toggle_round_trips() {
        let builder = ClientBuilder::new("wnc".into(), SecretString::from("t".to_owned()))
            .insecure_skip_verify(true);
        assert_eq!(builder.transport.tls, TlsMode::DangerAcceptInvalid);
        let builder = builder.insecure_skip_verify(false);
        assert_eq!(builder.transport.tls, TlsMode::System);
    }

    #[test]
    fn empty_user_agent_is_rejected() {
        let err = Client::builder("wnc", "dG9rZW4=")
            .user_agent("")
            .build()
            .unwrap_err();
        assert!(config_message(&err).contains("user agent"));
    }
}
