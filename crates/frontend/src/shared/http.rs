//! Authenticated JSON calls against the marketplace API.
//!
//! Every helper returns `Result<T, String>` where the error is already the
//! text to show the user: the server's `message`, or a generic fallback.

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Turn a non-2xx response into a user-facing message.
pub async fn error_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = ApiErrorBody::from_text(&text).user_message(status, fallback);
    log::warn!("{} {} -> {}: {}", fallback, response.url(), status, message);
    message
}

async fn send(request: Result<Request, gloo_net::Error>, fallback: &str) -> Result<Response, String> {
    let request = request.map_err(|e| format!("Failed to build request: {}", e))?;
    let response = request.send().await.map_err(|e| {
        log::error!("{}: network error: {}", fallback, e);
        ApiErrorBody::default().user_message(0, fallback)
    })?;
    if !response.ok() {
        return Err(error_message(response, fallback).await);
    }
    Ok(response)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str, fallback: &str) -> Result<T, String> {
    let response = send(with_auth(Request::get(&api_url(path))).build(), fallback).await?;
    parse(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, String> {
    let response = send(with_auth(Request::post(&api_url(path))).json(body), fallback).await?;
    parse(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, String> {
    let response = send(with_auth(Request::put(&api_url(path))).json(body), fallback).await?;
    parse(response).await
}

/// PUT/PATCH-style call whose response body is ignored.
pub async fn put_unit<B: Serialize>(path: &str, body: &B, fallback: &str) -> Result<(), String> {
    send(with_auth(Request::put(&api_url(path))).json(body), fallback).await?;
    Ok(())
}

pub async fn delete(path: &str, fallback: &str) -> Result<(), String> {
    send(with_auth(Request::delete(&api_url(path))).build(), fallback).await?;
    Ok(())
}

/// Multipart upload; `put` selects PUT instead of POST.
pub async fn send_form<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
    put: bool,
    fallback: &str,
) -> Result<T, String> {
    let builder = if put {
        Request::put(&api_url(path))
    } else {
        Request::post(&api_url(path))
    };
    let response = send(with_auth(builder).body(form), fallback).await?;
    parse(response).await
}

/// Unwrap `{ "data": ... }` envelopes some endpoints use.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(value) => value,
        }
    }
}

/// Payload of an endpoint that may answer `null`, `{ "data": null }`,
/// `{ "data": {..} }` or the bare object.
pub fn optional_payload<T: DeserializeOwned>(value: serde_json::Value) -> Result<Option<T>, String> {
    let inner = match value {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    };
    if inner.is_null() {
        return Ok(None);
    }
    serde_json::from_value(inner)
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn envelope_accepts_both_shapes() {
        let wrapped: Envelope<Vec<u32>> = serde_json::from_value(json!({ "data": [1, 2] })).unwrap();
        assert_eq!(wrapped.into_inner(), vec![1, 2]);
        let bare: Envelope<Vec<u32>> = serde_json::from_value(json!([3])).unwrap();
        assert_eq!(bare.into_inner(), vec![3]);
    }

    #[test]
    fn optional_payload_shapes() {
        assert_eq!(optional_payload::<Item>(json!(null)).unwrap(), None);
        assert_eq!(optional_payload::<Item>(json!({ "data": null })).unwrap(), None);
        assert_eq!(
            optional_payload::<Item>(json!({ "data": { "name": "a" } })).unwrap(),
            Some(Item { name: "a".into() })
        );
        assert_eq!(
            optional_payload::<Item>(json!({ "name": "b" })).unwrap(),
            Some(Item { name: "b".into() })
        );
    }
}
