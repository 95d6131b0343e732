// Generic request helpers.
//
// Each helper takes the client as `impl Into<Option<&Client>>`: pass a
// `&Client` normally, `None` to get `Error::NilClient` back instead of a
// request. Responses with an empty body decode to `T::default()`.

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::error::{Error, preview};

fn require<'a>(client: impl Into<Option<&'a Client>>) -> Result<&'a Client, Error> {
    client.into().ok_or(Error::NilClient)
}

/// Decode a response body, treating an empty body as the zero value.
pub fn decode<T>(body: &Bytes) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        let text = String::from_utf8_lossy(body).into_owned();
        Error::Deserialization {
            message: format!(
                "failed to unmarshal response: {e} (body preview: {:?})",
                preview(&text)
            ),
            body: text,
            source: e,
        }
    })
}

/// `GET /restconf/data/<path>` decoded into `T`.
pub async fn get<'a, T>(client: impl Into<Option<&'a Client>>, path: &str) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    let client = require(client)?;
    let body = client.do_request(Method::GET, path).await?;
    decode(&body)
}

/// `POST /restconf/data/<path>` with a JSON payload, decoded into `T`.
pub async fn post<'a, T, P>(
    client: impl Into<Option<&'a Client>>,
    path: &str,
    payload: &P,
) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
    P: Serialize + ?Sized,
{
    let client = require(client)?;
    let body = client.do_with_payload(Method::POST, path, payload).await?;
    decode(&body)
}

/// `PUT /restconf/data/<path>` with a JSON payload, decoded into `T`.
pub async fn put<'a, T, P>(
    client: impl Into<Option<&'a Client>>,
    path: &str,
    payload: &P,
) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
    P: Serialize + ?Sized,
{
    let client = require(client)?;
    let body = client.do_with_payload(Method::PUT, path, payload).await?;
    decode(&body)
}

/// `PATCH /restconf/data/<path>` with a JSON payload, decoded into `T`.
pub async fn patch<'a, T, P>(
    client: impl Into<Option<&'a Client>>,
    path: &str,
    payload: &P,
) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
    P: Serialize + ?Sized,
{
    let client = require(client)?;
    let body = client.do_with_payload(Method::PATCH, path, payload).await?;
    decode(&body)
}

/// `DELETE /restconf/data/<path>`; the body is discarded.
pub async fn delete<'a>(client: impl Into<Option<&'a Client>>, path: &str) -> Result<(), Error> {
    let client = require(client)?;
    client.do_request(Method::DELETE, path).await?;
    Ok(())
}

pub async fn post_void<'a, P>(
    client: impl Into<Option<&'a Client>>,
    path: &str,
    payload: &P,
) -> Result<(), Error>
where
    P: Serialize + ?Sized,
{
    let client = require(client)?;
    client.do_with_payload(Method::POST, path, payload).await?;
    Ok(())
}

pub async fn put_void<'a, P>(
    client: impl Into<Option<&'a Client>>,
    path: &str,
    payload: &P,
) -> Result<(), Error>
where
    P: Serialize + ?Sized,
{
    let client = require(client)?;
    client.do_with_payload(Method::PUT, path, payload).await?;
    Ok(())
}

pub async fn patch_void<'a, P>(
    client: impl Into<Option<&'a Client>>,
    path: &str,
    payload: &P,
) -> Result<(), Error>
where
    P: Serialize + ?Sized,
{
    let client = require(client)?;
    client.do_with_payload(Method::PATCH, path, payload).await?;
    Ok(())
}

/// `POST /restconf/operations/<rpc_path>`, decoded into `T`.
pub async fn rpc<'a, T, P>(
    client: impl Into<Option<&'a Client>>,
    rpc_path: &str,
    payload: &P,
) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
    P: Serialize + ?Sized,
{
    let client = require(client)?;
    let body = client
        .do_rpc_with_payload(Method::POST, rpc_path, payload)
        .await?;
    decode(&body)
}

/// `POST /restconf/operations/<rpc_path>`; the body is discarded.
pub async fn rpc_void<'a, P>(
    client: impl Into<Option<&'a Client>>,
    rpc_path: &str,
    payload: &P,
) -> Result<(), Error>
where
    P: Serialize + ?Sized,
{
    let client = require(client)?;
    client
        .do_rpc_with_payload(Method::POST, rpc_path, payload)
        .await?;
    Ok(())
}
