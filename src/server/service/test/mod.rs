use crate::server::{
    error::AppError,
    service::{auth::password::PasswordHasher, session::ActivationLock},
};
use test_utils::{builder::TestBuilder, factory};

mod business;
mod session;

/// bcrypt work factor used throughout tests; the minimum bcrypt accepts.
const TEST_BCRYPT_COST: u32 = 4;

fn hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_BCRYPT_COST)
}
