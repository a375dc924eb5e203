//! User endpoints.
//!
//! Signup, OTP verification and the admin routes are open. Profile and password changes
//! require a bearer token issued to the account named in the path.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, StatusDto},
        user::{
            ChangePasswordDto, CreateUserDto, OtpSentDto, ResendOtpDto, ResetUserPasswordDto,
            SignupDto, SignupResultDto, UpdateProfileDto, UpdateUserDto, UserDto, VerifyOtpDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{CreateUserParams, UpdateProfileParams, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
        util::json::ApiJson,
    },
};

pub static USER_TAG: &str = "user";

/// Register a new account.
///
/// Hashes the password, stores the user unverified and issues a phone OTP.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection and password hasher
/// - `payload` - Name, email, phone and password
///
/// # Returns
/// - `201 Created` - The new user in `data` with `requiresOtp` set
/// - `400 Bad Request` - Missing fields, invalid email or short password
/// - `409 Conflict` - Email or phone already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users/signup",
    tag = USER_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created; phone verification pending", body = ApiResponse),
        (status = 400, description = "Missing or invalid fields", body = ApiResponse),
        (status = 409, description = "Email or phone already registered", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.passwords)
        .create(CreateUserParams::from_signup(payload)?)
        .await?;

    let body = ApiResponse::ok("Account created successfully. Please verify your phone number.")
        .with_data(&SignupResultDto {
            user: user.into_dto(),
            requires_otp: true,
        })?;

    Ok((StatusCode::CREATED, Json(body)))
}

/// Verify a phone number with the OTP sent to it.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Phone number and OTP code
///
/// # Returns
/// - `200 OK` - The verified user in `data`
/// - `400 Bad Request` - Missing input, wrong code or expired code
/// - `404 Not Found` - No active user with that phone
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/verify-otp",
    tag = USER_TAG,
    request_body = VerifyOtpDto,
    responses(
        (status = 200, description = "Phone verified", body = ApiResponse),
        (status = 400, description = "Missing input, wrong or expired OTP", body = ApiResponse),
        (status = 404, description = "No active user with that phone", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn verify_otp(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<VerifyOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.passwords)
        .verify_otp(payload.phone, payload.otp)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Phone verified successfully").with_data(&user.into_dto())?),
    ))
}

/// Issue a fresh OTP for a phone number.
///
/// The code itself is only echoed back when the server runs with secrets exposed.
///
/// # Returns
/// - `200 OK` - Phone and expiry in `data`
/// - `400 Bad Request` - Phone missing
/// - `404 Not Found` - No active user with that phone
#[utoipa::path(
    post,
    path = "/api/users/resend-otp",
    tag = USER_TAG,
    request_body = ResendOtpDto,
    responses(
        (status = 200, description = "New OTP issued", body = ApiResponse),
        (status = 400, description = "Phone missing", body = ApiResponse),
        (status = 404, description = "No active user with that phone", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn resend_otp(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ResendOtpDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = UserService::new(&state.db, &state.passwords)
        .resend_otp(payload.phone)
        .await?;

    let body = ApiResponse::ok("OTP sent successfully").with_data(&OtpSentDto {
        phone: issued.phone,
        expires_in: issued.expires_in,
        otp: state.expose_secrets.then_some(issued.otp),
    })?;

    Ok((StatusCode::OK, Json(body)))
}

/// Update the caller's own profile.
///
/// # Access Control
/// - `Owner` - Bearer token must belong to `user_id`
///
/// # Arguments
/// - `state` - Application state containing the database connection and token signer
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Public user identifier from the path
/// - `payload` - Profile fields to change
///
/// # Returns
/// - `200 OK` - The updated user in `data`
/// - `400 Bad Request` - No fields to update
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Token belongs to another account
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - Phone number already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/users/profile/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated; data holds the user", body = ApiResponse),
        (status = 400, description = "No fields to update", body = ApiResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ApiResponse),
        (status = 403, description = "Token belongs to another account", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 409, description = "Phone number already in use", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require_account(&user_id)?;

    let user = UserService::new(&state.db, &state.passwords)
        .update_profile(UpdateProfileParams::from_dto(user_id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Profile updated successfully").with_data(&user.into_dto())?),
    ))
}

/// Change the caller's password after checking the current one.
///
/// # Access Control
/// - `Owner` - Bearer token must belong to `user_id`
///
/// # Arguments
/// - `state` - Application state containing the database connection and password hasher
/// - `headers` - Request headers carrying the bearer token
/// - `user_id` - Public user identifier from the path
/// - `payload` - Current and new password
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Missing input or new password too short
/// - `401 Unauthorized` - Bad token or current password incorrect
/// - `403 Forbidden` - Token belongs to another account
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    patch,
    path = "/api/users/change-password/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = ApiResponse),
        (status = 400, description = "Missing input or new password too short", body = ApiResponse),
        (status = 401, description = "Bad token or current password incorrect", body = ApiResponse),
        (status = 403, description = "Token belongs to another account", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    ApiJson(payload): ApiJson<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require_account(&user_id)?;

    UserService::new(&state.db, &state.passwords)
        .change_password(&user_id, payload.current_password, payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Password changed successfully")),
    ))
}

/// Create a user from the admin panel.
///
/// # Arguments
/// - `state` - Application state containing the database connection and password hasher
/// - `payload` - Contact details, membership flag and password
///
/// # Returns
/// - `201 Created` - The new user in `data`
/// - `400 Bad Request` - Missing or invalid fields
/// - `409 Conflict` - Email or phone already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = ApiResponse),
        (status = 400, description = "Missing or invalid fields", body = ApiResponse),
        (status = 409, description = "Email or phone already registered", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.passwords)
        .create(CreateUserParams::from_admin_dto(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(
            ApiResponse::ok("User created successfully. Please verify your phone.")
                .with_data(&user.into_dto())?,
        ),
    ))
}

/// Get every user, newest first.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user, newest first", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = into_dtos(
        UserService::new(&state.db, &state.passwords)
            .get_all()
            .await?,
    );

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Users fetched").with_data(&users)?),
    ))
}

/// Get a specific user by public id.
///
/// # Returns
/// - `200 OK` - The user in `data`
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    responses(
        (status = 200, description = "The user", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db, &state.passwords)
        .get_by_user_id(&user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("User fetched").with_data(&user.into_dto())?),
    ))
}

/// Update a user's details and membership from the admin panel.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Public user identifier from the path
/// - `payload` - Fields to change; name is required
///
/// # Returns
/// - `200 OK` - Every user in `data`
/// - `400 Bad Request` - Name missing
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - Phone number already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated; data holds every user", body = ApiResponse),
        (status = 400, description = "Name missing", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 409, description = "Phone number already in use", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, &state.passwords);

    service
        .update(UpdateUserParams::from_dto(user_id, payload)?)
        .await?;
    let users = into_dtos(service.get_all().await?);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("User updated successfully").with_data(&users)?),
    ))
}

/// Replace a user's password without the current one.
///
/// # Arguments
/// - `state` - Application state containing the database connection and password hasher
/// - `user_id` - Public user identifier from the path
/// - `payload` - The new password
///
/// # Returns
/// - `200 OK` - Password replaced
/// - `400 Bad Request` - Password missing
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}/password",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    request_body = ResetUserPasswordDto,
    responses(
        (status = 200, description = "Password replaced", body = ApiResponse),
        (status = 400, description = "Password missing", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn reset_user_password(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(payload): ApiJson<ResetUserPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db, &state.passwords)
        .reset_password(&user_id, payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Password reset successful")),
    ))
}

/// Activate or deactivate an account.
///
/// # Returns
/// - `200 OK` - Message names the new state
/// - `400 Bad Request` - Status missing or not a boolean
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    patch,
    path = "/api/users/toggle/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    request_body = StatusDto,
    responses(
        (status = 200, description = "Account activated or deactivated", body = ApiResponse),
        (status = 400, description = "Status missing or not a boolean", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn toggle_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(payload): ApiJson<StatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let active = UserService::new(&state.db, &state.passwords)
        .set_active(&user_id, payload.status)
        .await?;

    let message = format!(
        "User {} successfully",
        if active { "activated" } else { "deactivated" }
    );

    Ok((StatusCode::OK, Json(ApiResponse::ok(message))))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    responses(
        (status = 200, description = "User deleted", body = ApiResponse),
        (status = 404, description = "User not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db, &state.passwords)
        .delete(&user_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::ok("User deleted successfully"))))
}

fn into_dtos(users: Vec<User>) -> Vec<UserDto> {
    users.into_iter().map(User::into_dto).collect()
}
