//! SeaORM entity models for the application database.

pub mod prelude;

pub mod academic_year;
pub mod business;
pub mod business_like;
pub mod business_save;
pub mod school;
pub mod session;
pub mod user;
