use crate::server::{
    data::session::SessionRepository,
    model::session::{CreateSessionParams, UpdateSessionParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod deactivate_all;
mod find_active;
mod update;

fn params(title: &str, active: bool) -> CreateSessionParams {
    CreateSessionParams {
        title: title.to_string(),
        academic_year: None,
        year_id: None,
        active,
        year_colors: None,
        created_by: None,
    }
}
