//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a fixed-width uppercase identifier from the counter, e.g. `T0000042` for width 8.
pub fn next_code(prefix: char, width: usize) -> String {
    format!("{}{:0>pad$}", prefix, next_id(), pad = width - 1)
}

/// Builds a unique `#RRGGBB` color from the counter.
pub fn next_color() -> String {
    format!("#{:06X}", next_id() & 0xFF_FFFF)
}

/// Creates a user and a business owned by that user.
///
/// # Returns
/// - `Ok((user, business))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_business_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::business::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let business = crate::factory::business::BusinessFactory::new(db)
        .user_id(&user.user_id)
        .build()
        .await?;

    Ok((user, business))
}
