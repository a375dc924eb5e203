//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are built from request
//! DTOs by the controllers; their `from_dto` constructors perform required-field checks so
//! services only ever see well-formed input.

pub mod academic_year;
pub mod business;
pub mod school;
pub mod session;
pub mod user;
