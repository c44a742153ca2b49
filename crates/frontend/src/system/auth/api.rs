//! Session endpoints. These bypass `shared::http` because they manage the
//! token that `shared::http` attaches.

use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;
use crate::shared::http::{error_message, Envelope};

async fn post_session<B: Serialize>(path: &str, body: &B, fallback: &str) -> Result<Response, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| {
            log::error!("{}: network error: {}", path, e);
            format!("{}: network error", fallback)
        })?;
    if !response.ok() {
        return Err(error_message(response, fallback).await);
    }
    Ok(response)
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<Envelope<T>>()
        .await
        .map(Envelope::into_inner)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let body = LoginRequest { email, password };
    let response = post_session("/api/auth/login", &body, "Invalid email or password").await?;
    read_envelope(response).await
}

/// Exchange the refresh token for a new access token.
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    let body = RefreshRequest { refresh_token };
    let response = post_session("/api/auth/refresh", &body, "Session expired").await?;
    read_envelope(response).await
}

/// Revoke the refresh token server-side.
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let body = RefreshRequest { refresh_token };
    post_session("/api/auth/logout", &body, "Logout failed").await?;
    Ok(())
}

/// Profile of the holder of `access_token`; used to validate a restored session.
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to reach the server: {}", e))?;
    if !response.ok() {
        return Err(error_message(response, "Session is no longer valid").await);
    }
    read_envelope(response).await
}
