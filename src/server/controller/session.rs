//! Session endpoints.
//!
//! Every response that carries sessions serializes `active` as a JSON boolean. Mutations
//! answer with the affected id in `info` and the full session list in `data` so clients
//! can refresh in one round trip.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ApiResponse,
        session::{
            ActivateSessionDto, CreateSessionDto, SessionCreatedDto, SessionDto, SessionRefDto,
            UpdateSessionDto,
        },
    },
    server::{
        error::AppError,
        model::session::{CreateSessionParams, Session, UpdateSessionParams},
        service::session::SessionService,
        state::AppState,
        util::json::ApiJson,
    },
};

pub static SESSION_TAG: &str = "session";

/// Create a new session.
///
/// Generates a unique eight character id and an unused display color. When the
/// payload marks the session active, every other session is deactivated in the
/// same transaction.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection and activation lock
/// - `payload` - Session title and optional active flag
///
/// # Returns
/// - `201 Created` - Id and color in `info`, every session in `data`
/// - `400 Bad Request` - Missing session title
/// - `409 Conflict` - Generated id or color collided after all retries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = SESSION_TAG,
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Session created; info holds its id and color", body = ApiResponse),
        (status = 400, description = "Missing session title", body = ApiResponse),
        (status = 409, description = "Generated id or color collided", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SessionService::new(&state.db, &state.activation);

    let session = service.create(CreateSessionParams::from_dto(payload)?).await?;
    let sessions = into_dtos(service.get_all().await?);

    let body = ApiResponse::ok("Session created successfully")
        .with_info(&SessionCreatedDto {
            session_id: session.session_id,
            session_color: session.session_color,
        })?
        .with_data(&sessions)?;

    Ok((StatusCode::CREATED, Json(body)))
}

/// Get every session, newest first.
///
/// # Returns
/// - `200 OK` - List of sessions in `data`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/sessions",
    tag = SESSION_TAG,
    responses(
        (status = 200, description = "Every session, newest first", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_sessions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let sessions = into_dtos(
        SessionService::new(&state.db, &state.activation)
            .get_all()
            .await?,
    );

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Sessions fetched").with_data(&sessions)?),
    ))
}

/// Get a specific session by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session_id` - Session identifier from the path
///
/// # Returns
/// - `200 OK` - The session in `info`
/// - `404 Not Found` - No session with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/sessions/{session_id}",
    tag = SESSION_TAG,
    params(
        ("session_id" = String, Path, description = "Session identifier")
    ),
    responses(
        (status = 200, description = "The session, in info", body = ApiResponse),
        (status = 404, description = "Session not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_session_by_id(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let session = SessionService::new(&state.db, &state.activation)
        .get_by_id(&session_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Session fetched").with_info(&session.into_dto())?),
    ))
}

/// Get the currently active session.
///
/// Answers `200 OK` in both cases; `info` is null when no session is active.
#[utoipa::path(
    get,
    path = "/api/sessions/active",
    tag = SESSION_TAG,
    responses(
        (status = 200, description = "The active session in info, or null when none is active", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_active_session(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let active = SessionService::new(&state.db, &state.activation)
        .get_active()
        .await?;

    let body = match active {
        Some(session) => ApiResponse::ok("Active session fetched").with_info(&session.into_dto())?,
        None => ApiResponse::ok("No active session found"),
    };

    Ok((StatusCode::OK, Json(body)))
}

/// Update a session's title or active flag.
///
/// Omitted fields keep their stored value. Setting `active` to true runs under
/// the activation lock so exactly one session remains active afterwards.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection and activation lock
/// - `payload` - Session id plus the fields to change
///
/// # Returns
/// - `200 OK` - Session id in `info`, every session in `data`
/// - `400 Bad Request` - Missing session id or blank title
/// - `404 Not Found` - No session with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/sessions",
    tag = SESSION_TAG,
    request_body = UpdateSessionDto,
    responses(
        (status = 200, description = "Session updated; data holds every session", body = ApiResponse),
        (status = 400, description = "Missing sessionId", body = ApiResponse),
        (status = 404, description = "Session not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn update_session(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SessionService::new(&state.db, &state.activation);
    let params = UpdateSessionParams::from_dto(payload)?;
    let session_id = params.session_id.clone();

    service.update(params).await?;
    let sessions = into_dtos(service.get_all().await?);

    let body = ApiResponse::ok("Session updated successfully")
        .with_info(&SessionRefDto { session_id })?
        .with_data(&sessions)?;

    Ok((StatusCode::OK, Json(body)))
}

/// Make a session the only active one.
///
/// Deactivates all sessions and activates the target inside a single transaction
/// held under the activation lock.
///
/// # Access Control
/// - `Public` - No authentication required
///
/// # Arguments
/// - `state` - Application state containing the database connection and activation lock
/// - `payload` - Id of the session to activate
///
/// # Returns
/// - `200 OK` - Session id in `info`, every session in `data`
/// - `400 Bad Request` - Missing session id
/// - `404 Not Found` - No session with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/sessions/activate",
    tag = SESSION_TAG,
    request_body = ActivateSessionDto,
    responses(
        (status = 200, description = "Session is now the only active one; data holds every session", body = ApiResponse),
        (status = 400, description = "Missing sessionId", body = ApiResponse),
        (status = 404, description = "Session not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn activate_session(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ActivateSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SessionService::new(&state.db, &state.activation);
    let session_id = payload.session_id.unwrap_or_default();

    service.activate(&session_id).await?;
    let sessions = into_dtos(service.get_all().await?);

    let body = ApiResponse::ok("Session activated successfully")
        .with_info(&SessionRefDto {
            session_id: session_id.trim().to_string(),
        })?
        .with_data(&sessions)?;

    Ok((StatusCode::OK, Json(body)))
}

/// Delete an inactive session.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session_id` - Session identifier from the path
///
/// # Returns
/// - `200 OK` - Remaining sessions in `data`
/// - `400 Bad Request` - Session is currently active
/// - `404 Not Found` - No session with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/sessions/{session_id}",
    tag = SESSION_TAG,
    params(
        ("session_id" = String, Path, description = "Session identifier")
    ),
    responses(
        (status = 200, description = "Session deleted; data holds the remaining sessions", body = ApiResponse),
        (status = 400, description = "Session is active", body = ApiResponse),
        (status = 404, description = "Session not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = SessionService::new(&state.db, &state.activation);

    service.delete(&session_id).await?;
    let sessions = into_dtos(service.get_all().await?);

    let body = ApiResponse::ok("Session deleted successfully")
        .with_info(&SessionRefDto { session_id })?
        .with_data(&sessions)?;

    Ok((StatusCode::OK, Json(body)))
}

fn into_dtos(sessions: Vec<Session>) -> Vec<SessionDto> {
    sessions.into_iter().map(Session::into_dto).collect()
}
