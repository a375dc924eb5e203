//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table each and convert entity models into
//! domain models at the boundary. Repositories that take part in transactions are generic
//! over `ConnectionTrait` so the same code runs against the pool or a
//! `DatabaseTransaction`. Id-scoped writes return the number of affected rows and leave
//! the not-found decision to the service layer.

pub mod academic_year;
pub mod business;
pub mod identifier;
pub mod interaction;
pub mod school;
pub mod session;
pub mod user;

#[cfg(test)]
mod test;
