//! Login, logout and password lifecycle endpoints.

use crate::error::ApiError;
use crate::http;
use crate::models::user::{User, UserEnvelope};
use serde::Serialize;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    remember: bool,
}

/// Authenticate. Primes the CSRF cookie first; the backend sets the
/// session cookie on success.
pub async fn login(email: &str, password: &str, remember: bool) -> Result<(), ApiError> {
    http::init_csrf().await?;
    let body = LoginRequest {
        email,
        password,
        remember,
    };
    http::fetch_unit_body(http::post("/api/login"), &body).await
}

/// Invalidate the session server-side. Callers treat failure as
/// best-effort; local state is cleared regardless.
pub async fn logout() -> Result<(), ApiError> {
    http::fetch_unit(http::post("/api/logout")).await
}

/// Who the session cookie belongs to.
pub async fn get_user() -> Result<User, ApiError> {
    let envelope: UserEnvelope = http::fetch_json(http::get("/api/user")).await?;
    Ok(envelope.user)
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

pub async fn forgot_password(email: &str) -> Result<(), ApiError> {
    http::init_csrf().await?;
    http::fetch_unit_body(http::post("/api/forgot-password"), &ForgotPasswordRequest { email })
        .await
}

#[derive(Serialize)]
struct ResetPasswordRequest<'a> {
    token: &'a str,
    email: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
}

/// Complete an emailed reset link.
pub async fn reset_password(
    token: &str,
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<(), ApiError> {
    http::init_csrf().await?;
    let body = ResetPasswordRequest {
        token,
        email,
        password,
        password_confirmation,
    };
    http::fetch_unit_body(http::post("/api/reset-password"), &body).await
}

#[derive(Serialize)]
struct UpdatePasswordRequest<'a> {
    current_password: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
}

/// Change the password of the logged-in account.
pub async fn update_password(
    current_password: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<(), ApiError> {
    http::init_csrf().await?;
    let body = UpdatePasswordRequest {
        current_password,
        password,
        password_confirmation,
    };
    http::fetch_unit_body(http::put("/api/password"), &body).await
}
