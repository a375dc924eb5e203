use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        academic_year::{
            AcademicYearDto, AcademicYearRefDto, CreateAcademicYearDto, UpdateAcademicYearDto,
        },
        api::{ApiResponse, StatusDto},
        auth::{
            ForgotPasswordDto, ResetPasswordDto, ResetTokenIssuedDto, SigninDto, SigninResultDto,
        },
        business::{BusinessDetailsDto, BusinessDto, BusinessRefDto, CreateBusinessDto, UpdateBusinessDto},
        interaction::{InteractionDto, InteractionStatusDto},
        school::{SchoolDto, UpsertSchoolDto},
        session::{
            ActivateSessionDto, CreateSessionDto, SessionCreatedDto, SessionDto, SessionRefDto,
            UpdateSessionDto,
        },
        user::{
            ChangePasswordDto, CreateUserDto, OtpSentDto, ResendOtpDto, ResetUserPasswordDto,
            SignupDto, SignupResultDto, UpdateProfileDto, UpdateUserDto, UserDto, VerifyOtpDto,
        },
    },
    server::{
        controller::{academic_year, auth, business, interaction, school, session, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "School Directory API", description = "Academic calendar, accounts and business directory"),
    paths(
        academic_year::create_academic_year,
        academic_year::get_academic_years,
        academic_year::get_academic_year_by_id,
        academic_year::update_academic_year,
        academic_year::delete_academic_year,
        session::create_session,
        session::get_sessions,
        session::get_session_by_id,
        session::get_active_session,
        session::update_session,
        session::activate_session,
        session::delete_session,
        auth::signin,
        auth::forgot_password,
        auth::reset_password,
        user::signup,
        user::verify_otp,
        user::resend_otp,
        user::update_profile,
        user::change_password,
        user::create_user,
        user::get_users,
        user::get_user_by_id,
        user::update_user,
        user::reset_user_password,
        user::toggle_user,
        user::delete_user,
        business::create_business,
        business::get_businesses,
        business::get_businesses_by_user,
        business::get_business_by_id,
        business::update_business,
        business::verify_business,
        business::toggle_business,
        business::delete_business,
        interaction::like_business,
        interaction::unlike_business,
        interaction::save_business,
        interaction::unsave_business,
        interaction::get_liked_businesses,
        interaction::get_saved_businesses,
        interaction::get_interaction_status,
        school::upsert_school,
        school::get_school,
    ),
    components(schemas(
        ApiResponse,
        StatusDto,
        AcademicYearDto,
        AcademicYearRefDto,
        CreateAcademicYearDto,
        UpdateAcademicYearDto,
        SessionDto,
        SessionRefDto,
        SessionCreatedDto,
        CreateSessionDto,
        UpdateSessionDto,
        ActivateSessionDto,
        SigninDto,
        SigninResultDto,
        ForgotPasswordDto,
        ResetTokenIssuedDto,
        ResetPasswordDto,
        UserDto,
        SignupDto,
        SignupResultDto,
        VerifyOtpDto,
        ResendOtpDto,
        OtpSentDto,
        CreateUserDto,
        UpdateProfileDto,
        UpdateUserDto,
        ChangePasswordDto,
        ResetUserPasswordDto,
        BusinessDto,
        BusinessDetailsDto,
        BusinessRefDto,
        CreateBusinessDto,
        UpdateBusinessDto,
        InteractionDto,
        InteractionStatusDto,
        SchoolDto,
        UpsertSchoolDto,
    )),
    tags(
        (name = "academic_year", description = "Academic years"),
        (name = "session", description = "Sessions and the active session"),
        (name = "auth", description = "Sign-in and password recovery"),
        (name = "user", description = "User accounts"),
        (name = "business", description = "Business listings"),
        (name = "interaction", description = "Likes and saves"),
        (name = "school", description = "School profile"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/openapi.json", get(openapi))
        .route(
            "/api/academicyears",
            post(academic_year::create_academic_year)
                .get(academic_year::get_academic_years)
                .patch(academic_year::update_academic_year),
        )
        .route(
            "/api/academicyears/{year_id}",
            get(academic_year::get_academic_year_by_id).delete(academic_year::delete_academic_year),
        )
        .route(
            "/api/sessions",
            post(session::create_session)
                .get(session::get_sessions)
                .patch(session::update_session),
        )
        .route("/api/sessions/active", get(session::get_active_session))
        .route("/api/sessions/activate", patch(session::activate_session))
        .route(
            "/api/sessions/{session_id}",
            get(session::get_session_by_id).delete(session::delete_session),
        )
        .route("/api/auth/signin", post(auth::signin))
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/users", post(user::create_user).get(user::get_users))
        .route("/api/users/signup", post(user::signup))
        .route("/api/users/verify-otp", post(user::verify_otp))
        .route("/api/users/resend-otp", post(user::resend_otp))
        .route("/api/users/profile/{user_id}", patch(user::update_profile))
        .route(
            "/api/users/change-password/{user_id}",
            patch(user::change_password),
        )
        .route("/api/users/toggle/{user_id}", patch(user::toggle_user))
        .route(
            "/api/users/{user_id}",
            get(user::get_user_by_id)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/users/{user_id}/password",
            patch(user::reset_user_password),
        )
        .route(
            "/api/business",
            post(business::create_business).get(business::get_businesses),
        )
        .route(
            "/api/business/user/{user_id}",
            get(business::get_businesses_by_user),
        )
        .route(
            "/api/business/verify/{business_id}",
            patch(business::verify_business),
        )
        .route(
            "/api/business/active/{business_id}",
            patch(business::toggle_business),
        )
        .route(
            "/api/business/{business_id}",
            get(business::get_business_by_id)
                .patch(business::update_business)
                .delete(business::delete_business),
        )
        .route(
            "/api/interactions/like",
            post(interaction::like_business).delete(interaction::unlike_business),
        )
        .route(
            "/api/interactions/save",
            post(interaction::save_business).delete(interaction::unsave_business),
        )
        .route(
            "/api/interactions/liked/{user_id}",
            get(interaction::get_liked_businesses),
        )
        .route(
            "/api/interactions/saved/{user_id}",
            get(interaction::get_saved_businesses),
        )
        .route(
            "/api/interactions/status/{business_id}/{user_id}",
            get(interaction::get_interaction_status),
        )
        .route(
            "/api/school",
            post(school::upsert_school).get(school::get_school),
        )
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
