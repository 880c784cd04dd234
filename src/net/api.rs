//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! session token attached as a bearer header. Server-side (SSR): stubs
//! returning a network error since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is classified here into `ApiError` (see `net::error`), so
//! callers branch over a closed enum and never inspect status codes or
//! error strings themselves.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    Comment, Family, FamilyMember, LoginResponse, MediaJob, Memory, NewMemory, UserProfile,
};

#[cfg(any(test, feature = "hydrate"))]
fn family_members_endpoint(family_id: &str) -> String {
    format!("/api/families/{family_id}/members")
}

#[cfg(any(test, feature = "hydrate"))]
fn memory_endpoint(memory_id: &str) -> String {
    format!("/api/memories/{memory_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn memory_like_endpoint(memory_id: &str) -> String {
    format!("/api/memories/{memory_id}/like")
}

#[cfg(any(test, feature = "hydrate"))]
fn memory_comments_endpoint(memory_id: &str) -> String {
    format!("/api/memories/{memory_id}/comments")
}

#[cfg(any(test, feature = "hydrate"))]
fn media_job_endpoint(job_id: &str) -> String {
    format!("/api/media/jobs/{job_id}")
}

/// Query string for the memory list, scoped to a month when given.
#[cfg(any(test, feature = "hydrate"))]
fn memories_query(month: Option<(i32, u32)>) -> String {
    match month {
        Some((year, month)) => format!("/api/memories?year={year}&month={month}"),
        None => "/api/memories".to_owned(),
    }
}

#[cfg(feature = "hydrate")]
fn bearer(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session::load_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = bearer(gloo_net::http::Request::get(url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = bearer(gloo_net::http::Request::post(url))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

#[cfg(feature = "hydrate")]
async fn send_expecting_ok(request: gloo_net::http::RequestBuilder) -> Result<(), ApiError> {
    let response = bearer(request)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::from_status(response.status()))
    }
}

#[cfg(not(feature = "hydrate"))]
fn server_stub<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// `ApiError::Unauthorized` on bad credentials, or the usual transport
/// classifications.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        post_json("/api/auth/login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        server_stub()
    }
}

/// Best-effort server-side session teardown via `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = send_expecting_ok(gloo_net::http::Request::post("/api/auth/logout")).await;
    }
}

/// Fetch the profile for `token` via `GET /api/users/me`.
///
/// The bootstrap flow passes the token explicitly so validation uses exactly
/// the credential read at the start of the run.
///
/// # Errors
///
/// `ApiError::Unauthorized` for a rejected token, `ApiError::NotFound` when
/// the token maps to no user, transport classifications otherwise.
pub async fn fetch_current_user(token: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::get("/api/users/me")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        server_stub()
    }
}

/// Fetch a family record via `GET /api/families/{id}`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn fetch_family(family_id: &str) -> Result<Family, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/families/{family_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = family_id;
        server_stub()
    }
}

/// Fetch the member roster via `GET /api/families/{id}/members`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn fetch_family_members(family_id: &str) -> Result<Vec<FamilyMember>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&family_members_endpoint(family_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = family_id;
        server_stub()
    }
}

/// Create a family via `POST /api/families`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn create_family(name: &str) -> Result<Family, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name });
        post_json("/api/families", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        server_stub()
    }
}

/// Join a family by invite code via `POST /api/families/join`.
///
/// # Errors
///
/// `ApiError::NotFound` for an unknown code, transport classifications
/// otherwise.
pub async fn join_family(invite_code: &str) -> Result<Family, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "invite_code": invite_code });
        post_json("/api/families/join", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = invite_code;
        server_stub()
    }
}

/// Fetch memories via `GET /api/memories`, optionally scoped to a month.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn fetch_memories(month: Option<(i32, u32)>) -> Result<Vec<Memory>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&memories_query(month)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = month;
        server_stub()
    }
}

/// Fetch one memory via `GET /api/memories/{id}`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn fetch_memory(memory_id: &str) -> Result<Memory, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&memory_endpoint(memory_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = memory_id;
        server_stub()
    }
}

/// Create a memory via `POST /api/memories`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn create_memory(memory: &NewMemory) -> Result<Memory, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/memories", memory).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = memory;
        server_stub()
    }
}

/// Delete a memory via `DELETE /api/memories/{id}`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn delete_memory(memory_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_expecting_ok(gloo_net::http::Request::delete(&memory_endpoint(memory_id))).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = memory_id;
        server_stub()
    }
}

/// Like or unlike a memory via `POST`/`DELETE /api/memories/{id}/like`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn set_memory_liked(memory_id: &str, liked: bool) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = memory_like_endpoint(memory_id);
        let request = if liked {
            gloo_net::http::Request::post(&url)
        } else {
            gloo_net::http::Request::delete(&url)
        };
        send_expecting_ok(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (memory_id, liked);
        server_stub()
    }
}

/// Fetch comments via `GET /api/memories/{id}/comments`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn fetch_comments(memory_id: &str) -> Result<Vec<Comment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&memory_comments_endpoint(memory_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = memory_id;
        server_stub()
    }
}

/// Create a comment via `POST /api/memories/{id}/comments`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn create_comment(memory_id: &str, body: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "body": body });
        post_json(&memory_comments_endpoint(memory_id), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (memory_id, body);
        server_stub()
    }
}

/// Start a photo-animation job via `POST /api/media/animations`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn request_photo_animation(memory_id: &str, image_url: &str) -> Result<MediaJob, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "memory_id": memory_id, "image_url": image_url });
        post_json("/api/media/animations", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (memory_id, image_url);
        server_stub()
    }
}

/// Start a picture-diary job via `POST /api/media/diaries`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn request_picture_diary(memory_id: &str) -> Result<MediaJob, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "memory_id": memory_id });
        post_json("/api/media/diaries", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = memory_id;
        server_stub()
    }
}

/// Poll a media job via `GET /api/media/jobs/{id}`.
///
/// # Errors
///
/// Standard `ApiError` classifications.
pub async fn fetch_media_job(job_id: &str) -> Result<MediaJob, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&media_job_endpoint(job_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        server_stub()
    }
}
