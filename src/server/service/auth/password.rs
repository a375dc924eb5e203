use crate::server::error::AppError;

/// bcrypt hashing with a configurable work factor.
///
/// Hashing and verification run on the blocking thread pool so request workers are never
/// stalled by the key schedule.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, password: String) -> Result<String, AppError> {
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

        Ok(hash)
    }

    pub async fn verify(&self, password: String, hash: String) -> Result<bool, AppError> {
        let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

        Ok(valid)
    }
}
