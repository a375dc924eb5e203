//! Data transfer objects shared by the HTTP layer.
//!
//! Field names follow the JSON contract consumed by the existing web and mobile clients,
//! which is camelCase with a few historical exceptions (`Academicyear`, `is_member`).

pub mod academic_year;
pub mod api;
pub mod auth;
pub mod business;
pub mod interaction;
pub mod school;
pub mod session;
pub mod user;
