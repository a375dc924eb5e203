use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Utc;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::user::User,
    service::auth::token::TokenKeys,
};

mod require;
mod require_account;

fn user(user_id: &str) -> User {
    User {
        id: 1,
        user_id: user_id.to_string(),
        name: "Ama Mensah".to_string(),
        email: "ama@example.com".to_string(),
        phone: Some("0244000000".to_string()),
        member: true,
        country: None,
        area: None,
        district: None,
        local_assembly: None,
        profile_url: None,
        is_active: true,
        email_verified: false,
        phone_verified: false,
        last_login: Some(Utc::now()),
        created_at: Utc::now(),
    }
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
