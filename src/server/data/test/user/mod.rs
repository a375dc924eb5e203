use chrono::{Duration, Utc};
use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateProfileParams, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_active_by_phone;
mod phone_taken;
mod reset_token;
mod update;
mod update_profile;

fn params(email: &str, phone: Option<&str>) -> CreateUserParams {
    CreateUserParams {
        name: "Kofi Boateng".to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
        password: "unused".to_string(),
        member: false,
        country: None,
        area: None,
        district: None,
        local_assembly: None,
        profile_url: None,
    }
}
