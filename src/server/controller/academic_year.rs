use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        academic_year::{
            AcademicYearDto, AcademicYearRefDto, CreateAcademicYearDto, UpdateAcademicYearDto,
        },
        api::ApiResponse,
    },
    server::{
        error::AppError,
        model::academic_year::{AcademicYear, CreateAcademicYearParams, UpdateAcademicYearParams},
        service::academic_year::AcademicYearService,
        state::AppState,
        util::json::ApiJson,
    },
};

pub static ACADEMIC_YEAR_TAG: &str = "academic_year";

#[utoipa::path(
    post,
    path = "/api/academicyears",
    tag = ACADEMIC_YEAR_TAG,
    request_body = CreateAcademicYearDto,
    responses(
        (status = 201, description = "Academic year created; data holds every year", body = ApiResponse),
        (status = 400, description = "Missing academic year name", body = ApiResponse),
        (status = 409, description = "Name, id or color already in use", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn create_academic_year(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateAcademicYearDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AcademicYearService::new(&state.db);

    let year = service
        .create(CreateAcademicYearParams::from_dto(payload)?)
        .await?;
    let years = into_dtos(service.get_all().await?);

    let body = ApiResponse::ok("Academic year created successfully")
        .with_info(&AcademicYearRefDto {
            year_id: year.year_id,
        })?
        .with_data(&years)?;

    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/api/academicyears",
    tag = ACADEMIC_YEAR_TAG,
    responses(
        (status = 200, description = "Every academic year, newest first", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_academic_years(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let years = into_dtos(AcademicYearService::new(&state.db).get_all().await?);

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Academic years fetched").with_data(&years)?),
    ))
}

#[utoipa::path(
    get,
    path = "/api/academicyears/{year_id}",
    tag = ACADEMIC_YEAR_TAG,
    params(
        ("year_id" = String, Path, description = "Academic year identifier")
    ),
    responses(
        (status = 200, description = "The academic year, in info", body = ApiResponse),
        (status = 404, description = "Academic year not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn get_academic_year_by_id(
    State(state): State<AppState>,
    Path(year_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let year = AcademicYearService::new(&state.db)
        .get_by_id(&year_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Academic year fetched").with_info(&year.into_dto())?),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/academicyears",
    tag = ACADEMIC_YEAR_TAG,
    request_body = UpdateAcademicYearDto,
    responses(
        (status = 200, description = "Academic year renamed; data holds every year", body = ApiResponse),
        (status = 400, description = "Missing yearId or name", body = ApiResponse),
        (status = 404, description = "Academic year not found", body = ApiResponse),
        (status = 409, description = "Name already in use", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn update_academic_year(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateAcademicYearDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AcademicYearService::new(&state.db);
    let params = UpdateAcademicYearParams::from_dto(payload)?;
    let year_id = params.year_id.clone();

    service.update(params).await?;
    let years = into_dtos(service.get_all().await?);

    let body = ApiResponse::ok("Academic year updated successfully")
        .with_info(&AcademicYearRefDto { year_id })?
        .with_data(&years)?;

    Ok((StatusCode::OK, Json(body)))
}

#[utoipa::path(
    delete,
    path = "/api/academicyears/{year_id}",
    tag = ACADEMIC_YEAR_TAG,
    params(
        ("year_id" = String, Path, description = "Academic year identifier")
    ),
    responses(
        (status = 200, description = "Academic year deleted; data holds the remaining years", body = ApiResponse),
        (status = 404, description = "Academic year not found", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    ),
)]
pub async fn delete_academic_year(
    State(state): State<AppState>,
    Path(year_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AcademicYearService::new(&state.db);

    service.delete(&year_id).await?;
    let years = into_dtos(service.get_all().await?);

    let body = ApiResponse::ok("Academic year deleted successfully")
        .with_info(&AcademicYearRefDto { year_id })?
        .with_data(&years)?;

    Ok((StatusCode::OK, Json(body)))
}

fn into_dtos(years: Vec<AcademicYear>) -> Vec<AcademicYearDto> {
    years.into_iter().map(AcademicYear::into_dto).collect()
}
