// wnc-api: Async Rust client for the Cisco IOS-XE Wireless Network Controller RESTCONF API

pub mod client;
pub mod error;
pub mod helpers;
pub mod model;
pub mod quirks;
pub mod request;
pub mod restconf;
pub mod routes;
pub mod service;
pub mod transport;
pub mod validation;

pub use client::{Client, ClientBuilder};
pub use error::{ApiError, Error, is_not_found_error};
pub use helpers::{
    delete, get, patch, patch_void, post, post_void, put, put_void, rpc, rpc_void,
};
pub use reqwest::Method;
pub use restconf::{Protocol, UrlBuilder, build_query_composite_url, build_query_url};
pub use service::Services;
pub use transport::{TlsMode, TransportConfig};
