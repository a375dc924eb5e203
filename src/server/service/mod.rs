//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate input that
//! needs database state (uniqueness, existence), turn affected-row counts into not-found
//! errors, and own every multi-statement transaction.

pub mod academic_year;
pub mod auth;
pub mod business;
pub mod identifier;
pub mod interaction;
pub mod school;
pub mod session;
pub mod user;

#[cfg(test)]
mod test;
