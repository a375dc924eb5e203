use crate::server::{data::academic_year::AcademicYearRepository, model::academic_year::CreateAcademicYearParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod name_exists;
mod rename;

fn params(name: &str) -> CreateAcademicYearParams {
    CreateAcademicYearParams {
        name: name.to_string(),
        start_date: None,
        end_date: None,
        created_by: Some("admin".to_string()),
    }
}
