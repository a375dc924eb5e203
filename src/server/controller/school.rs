use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ApiResponse, school::UpsertSchoolDto},
    server::{
        error::AppError, model::school::UpsertSchoolParams, service::school::SchoolService,
        state::AppState, util::json::ApiJson,
    },
};

pub static SCHOOL_TAG: &str = "school";

#[utoipa::path(
    post,
    path = "/api/school",
    tag = SCHOOL_TAG,
    request_body = UpsertSchoolDto,
    responses(
        (status = 200, description = "School profile created or replaced", body = ApiResponse),
        (status = 400, description = "School name missing", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn upsert_school(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpsertSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let school = SchoolService::new(&state.db)
        .upsert(UpsertSchoolParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::ok("School information saved successfully")
                .with_data(&school.into_dto())?,
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/school",
    tag = SCHOOL_TAG,
    responses(
        (status = 200, description = "School profile, or null data when unset", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_school(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let school = SchoolService::new(&state.db).get().await?;

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::ok("School information fetched")
                .with_data(&school.map(|s| s.into_dto()))?,
        ),
    ))
}
