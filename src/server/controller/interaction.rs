use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ApiResponse,
        interaction::{InteractionDto, InteractionStatusDto},
    },
    server::{
        controller::business::into_dtos,
        error::AppError,
        model::business::InteractionKind,
        service::interaction::InteractionService,
        state::AppState,
        util::json::ApiJson,
    },
};

pub static INTERACTION_TAG: &str = "interaction";

#[utoipa::path(
    post,
    path = "/api/interactions/like",
    tag = INTERACTION_TAG,
    request_body = InteractionDto,
    responses(
        (status = 200, description = "Business liked", body = ApiResponse),
        (status = 400, description = "businessId or userId missing", body = ApiResponse),
        (status = 404, description = "Business not found", body = ApiResponse),
        (status = 409, description = "Business already liked", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn like_business(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<InteractionDto>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, InteractionKind::Like, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/interactions/like",
    tag = INTERACTION_TAG,
    request_body = InteractionDto,
    responses(
        (status = 200, description = "Like removed", body = ApiResponse),
        (status = 400, description = "businessId or userId missing", body = ApiResponse),
        (status = 404, description = "Like not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn unlike_business(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<InteractionDto>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, InteractionKind::Like, payload).await
}

#[utoipa::path(
    post,
    path = "/api/interactions/save",
    tag = INTERACTION_TAG,
    request_body = InteractionDto,
    responses(
        (status = 200, description = "Business saved", body = ApiResponse),
        (status = 400, description = "businessId or userId missing", body = ApiResponse),
        (status = 404, description = "Business not found", body = ApiResponse),
        (status = 409, description = "Business already saved", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn save_business(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<InteractionDto>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, InteractionKind::Save, payload).await
}

#[utoipa::path(
    delete,
    path = "/api/interactions/save",
    tag = INTERACTION_TAG,
    request_body = InteractionDto,
    responses(
        (status = 200, description = "Save removed", body = ApiResponse),
        (status = 400, description = "businessId or userId missing", body = ApiResponse),
        (status = 404, description = "Save not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn unsave_business(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<InteractionDto>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, InteractionKind::Save, payload).await
}

#[utoipa::path(
    get,
    path = "/api/interactions/liked/{user_id}",
    tag = INTERACTION_TAG,
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    responses(
        (status = 200, description = "Businesses the user liked, most recent first", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_liked_businesses(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, InteractionKind::Like, &user_id).await
}

#[utoipa::path(
    get,
    path = "/api/interactions/saved/{user_id}",
    tag = INTERACTION_TAG,
    params(
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    responses(
        (status = 200, description = "Businesses the user saved, most recent first", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_saved_businesses(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, InteractionKind::Save, &user_id).await
}

#[utoipa::path(
    get,
    path = "/api/interactions/status/{business_id}/{user_id}",
    tag = INTERACTION_TAG,
    params(
        ("business_id" = String, Path, description = "Business identifier"),
        ("user_id" = String, Path, description = "Public user identifier")
    ),
    responses(
        (status = 200, description = "Whether the user liked and saved the business", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_interaction_status(
    State(state): State<AppState>,
    Path((business_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (liked, saved) = InteractionService::new(&state.db)
        .status(&business_id, &user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::ok("Interaction status fetched")
                .with_data(&InteractionStatusDto { liked, saved })?,
        ),
    ))
}

async fn add(
    state: &AppState,
    kind: InteractionKind,
    payload: InteractionDto,
) -> Result<(StatusCode, Json<ApiResponse>), AppError> {
    InteractionService::new(&state.db)
        .add(kind, payload.business_id, payload.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(format!("Business {}", kind.past_tense()))),
    ))
}

async fn remove(
    state: &AppState,
    kind: InteractionKind,
    payload: InteractionDto,
) -> Result<(StatusCode, Json<ApiResponse>), AppError> {
    InteractionService::new(&state.db)
        .remove(kind, payload.business_id, payload.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(format!("{} removed", kind.noun()))),
    ))
}

async fn list(
    state: &AppState,
    kind: InteractionKind,
    user_id: &str,
) -> Result<(StatusCode, Json<ApiResponse>), AppError> {
    let businesses = into_dtos(
        InteractionService::new(&state.db)
            .businesses_for_user(kind, user_id)
            .await?,
    );

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::ok(format!("{} businesses fetched", capitalize(kind.past_tense())))
                .with_data(&businesses)?,
        ),
    ))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
