use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, StatusDto},
        business::{BusinessDto, BusinessRefDto, CreateBusinessDto, UpdateBusinessDto},
    },
    server::{
        error::AppError,
        model::business::{Business, CreateBusinessParams, UpdateBusinessParams},
        service::business::BusinessService,
        state::AppState,
        util::json::ApiJson,
    },
};

pub static BUSINESS_TAG: &str = "business";

#[utoipa::path(
    post,
    path = "/api/business",
    tag = BUSINESS_TAG,
    request_body = CreateBusinessDto,
    responses(
        (status = 201, description = "Business created; info holds its id", body = ApiResponse),
        (status = 400, description = "userId or title missing", body = ApiResponse),
        (status = 409, description = "Generated id collided", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn create_business(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let business = BusinessService::new(&state.db)
        .create(CreateBusinessParams::from_dto(payload)?)
        .await?;

    let body = ApiResponse::ok("Business created successfully")
        .with_info(&BusinessRefDto {
            business_id: business.business_id.clone(),
        })?
        .with_data(&business.into_dto())?;

    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/api/business",
    tag = BUSINESS_TAG,
    responses(
        (status = 200, description = "Active businesses, newest first", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_businesses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let businesses = into_dtos(BusinessService::new(&state.db).get_active().await?);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Businesses fetched").with_data(&businesses)?),
    ))
}

#[utoipa::path(
    get,
    path = "/api/business/user/{user_id}",
    tag = BUSINESS_TAG,
    params(
        ("user_id" = String, Path, description = "Owner's public user identifier")
    ),
    responses(
        (status = 200, description = "Businesses owned by the user, newest first", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_businesses_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let businesses = into_dtos(
        BusinessService::new(&state.db)
            .get_by_user_id(&user_id)
            .await?,
    );

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("User businesses fetched").with_data(&businesses)?),
    ))
}

#[utoipa::path(
    get,
    path = "/api/business/{business_id}",
    tag = BUSINESS_TAG,
    params(
        ("business_id" = String, Path, description = "Business identifier")
    ),
    responses(
        (status = 200, description = "The business", body = ApiResponse),
        (status = 404, description = "Business not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_business_by_id(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let business = BusinessService::new(&state.db)
        .get_by_id(&business_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Business fetched").with_data(&business.into_dto())?),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/business/{business_id}",
    tag = BUSINESS_TAG,
    params(
        ("business_id" = String, Path, description = "Business identifier")
    ),
    request_body = UpdateBusinessDto,
    responses(
        (status = 200, description = "Business updated", body = ApiResponse),
        (status = 400, description = "No valid fields provided", body = ApiResponse),
        (status = 404, description = "Business not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn update_business(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    ApiJson(payload): ApiJson<UpdateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BusinessService::new(&state.db);

    service
        .update(UpdateBusinessParams::from_dto(business_id.clone(), payload))
        .await?;
    let business = service.get_by_id(&business_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Business updated successfully").with_data(&business.into_dto())?),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/business/verify/{business_id}",
    tag = BUSINESS_TAG,
    params(
        ("business_id" = String, Path, description = "Business identifier")
    ),
    request_body = StatusDto,
    responses(
        (status = 200, description = "Business verified or unverified", body = ApiResponse),
        (status = 400, description = "Status missing or not a boolean", body = ApiResponse),
        (status = 404, description = "Business not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn verify_business(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    ApiJson(payload): ApiJson<StatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let verified = BusinessService::new(&state.db)
        .set_verified(&business_id, payload.status)
        .await?;

    let message = format!(
        "Business {} successfully",
        if verified { "verified" } else { "unverified" }
    );

    Ok((StatusCode::OK, Json(ApiResponse::ok(message))))
}

#[utoipa::path(
    patch,
    path = "/api/business/active/{business_id}",
    tag = BUSINESS_TAG,
    params(
        ("business_id" = String, Path, description = "Business identifier")
    ),
    request_body = StatusDto,
    responses(
        (status = 200, description = "Business activated or deactivated", body = ApiResponse),
        (status = 400, description = "Status missing or not a boolean", body = ApiResponse),
        (status = 404, description = "Business not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn toggle_business(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
    ApiJson(payload): ApiJson<StatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let active = BusinessService::new(&state.db)
        .set_active(&business_id, payload.status)
        .await?;

    let message = format!(
        "Business {} successfully",
        if active { "activated" } else { "deactivated" }
    );

    Ok((StatusCode::OK, Json(ApiResponse::ok(message))))
}

#[utoipa::path(
    delete,
    path = "/api/business/{business_id}",
    tag = BUSINESS_TAG,
    params(
        ("business_id" = String, Path, description = "Business identifier")
    ),
    responses(
        (status = 200, description = "Business deleted", body = ApiResponse),
        (status = 404, description = "Business not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn delete_business(
    State(state): State<AppState>,
    Path(business_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    BusinessService::new(&state.db)
        .delete(&business_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Business deleted successfully")),
    ))
}

pub(super) fn into_dtos(businesses: Vec<Business>) -> Vec<BusinessDto> {
    businesses.into_iter().map(Business::into_dto).collect()
}
