use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ApiResponse,
        auth::{
            ForgotPasswordDto, ResetPasswordDto, ResetTokenIssuedDto, SigninDto, SigninResultDto,
        },
    },
    server::{
        error::AppError,
        service::auth::{token::TOKEN_TTL_SECONDS, AuthService},
        state::AppState,
        util::json::ApiJson,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SigninDto,
    responses(
        (status = 200, description = "Signed in; info holds the token, data the user", body = ApiResponse),
        (status = 400, description = "Email or password missing", body = ApiResponse),
        (status = 401, description = "Invalid credentials", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SigninDto>,
) -> Result<impl IntoResponse, AppError> {
    let signed_in = AuthService::new(&state.db, &state.passwords, &state.tokens)
        .signin(payload.email, payload.password)
        .await?;

    let body = ApiResponse::ok("Signed in successfully")
        .with_info(&SigninResultDto {
            token: signed_in.token,
            expires_in: TOKEN_TTL_SECONDS,
            otp_expires: signed_in.otp_expires,
            otp: state.expose_secrets.then_some(signed_in.otp),
        })?
        .with_data(&signed_in.user.into_dto())?;

    Ok((StatusCode::OK, Json(body)))
}

#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset token issued", body = ApiResponse),
        (status = 400, description = "Email missing", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db, &state.passwords, &state.tokens)
        .forgot_password(payload.email)
        .await?;

    let body = ApiResponse::ok("Password reset token issued").with_info(&ResetTokenIssuedDto {
        expires_at: issued.expires_at,
        reset_token: state.expose_secrets.then_some(issued.token),
    })?;

    Ok((StatusCode::OK, Json(body)))
}

#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password replaced", body = ApiResponse),
        (status = 400, description = "Missing input, short password, or invalid/expired token", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.passwords, &state.tokens)
        .reset_password(payload.token, payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Password updated successfully")),
    ))
}
