//! Session management and the single-active-session invariant.
//!
//! Every write that can change which session is active (create-as-active,
//! update-to-active, explicit activation, and the delete guard) runs inside an
//! [`ActivationScope`]: the process-wide activation lock is held and all statements share
//! one transaction. Dropping the scope without committing rolls the transaction back
//! before the lock is released.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use tokio::sync::{Mutex, MutexGuard};

use crate::server::{
    data::session::SessionRepository,
    error::AppError,
    model::session::{CreateSessionParams, Session, UpdateSessionParams},
    service::identifier::IdentifierService,
};

/// Process-wide lock serializing changes to the active flag.
///
/// SQLite deferred transactions do not serialize the deactivate-all/activate-one
/// sequence on their own, so concurrent activations queue here first.
#[derive(Clone, Default)]
pub struct ActivationLock(Arc<Mutex<()>>);

impl ActivationLock {
    /// Waits for the lock, then opens a transaction on `db`.
    pub async fn begin(&self, db: &DatabaseConnection) -> Result<ActivationScope<'_>, DbErr> {
        let guard = self.0.lock().await;
        let txn = db.begin().await?;

        Ok(ActivationScope { txn, _guard: guard })
    }
}

/// Open transaction plus held activation lock.
///
/// Field order matters: the transaction is dropped (rolled back) before the guard.
pub struct ActivationScope<'a> {
    txn: DatabaseTransaction,
    _guard: MutexGuard<'a, ()>,
}

impl ActivationScope<'_> {
    pub fn repo(&self) -> SessionRepository<'_, DatabaseTransaction> {
        SessionRepository::new(&self.txn)
    }

    /// Commits the transaction, then releases the lock.
    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }
}

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
    lock: &'a ActivationLock,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection, lock: &'a ActivationLock) -> Self {
        Self { db, lock }
    }

    /// Creates a session with a fresh id and color.
    ///
    /// When `params.active` is set, every other session is deactivated in the same
    /// transaction as the insert.
    pub async fn create(&self, params: CreateSessionParams) -> Result<Session, AppError> {
        let identifiers = IdentifierService::new(self.db);
        let session_id = identifiers.session_id().await?;
        let session_color = identifiers.session_color().await?;

        if !params.active {
            let session = SessionRepository::new(self.db)
                .create(session_id, session_color, params)
                .await?;
            return Ok(session);
        }

        let scope = self.lock.begin(self.db).await?;
        let deactivated = scope.repo().deactivate_all().await?;
        let session = scope
            .repo()
            .create(session_id, session_color, params)
            .await?;
        scope.commit().await?;

        tracing::info!(
            "Created active session {} ({} previously active)",
            session.session_id,
            deactivated
        );

        Ok(session)
    }

    /// Gets all sessions, newest first.
    pub async fn get_all(&self) -> Result<Vec<Session>, AppError> {
        Ok(SessionRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, session_id: &str) -> Result<Session, AppError> {
        SessionRepository::new(self.db)
            .find_by_id(session_id)
            .await?
            .ok_or_else(session_not_found)
    }

    /// Gets the active session. `None` is a valid state.
    pub async fn get_active(&self) -> Result<Option<Session>, AppError> {
        Ok(SessionRepository::new(self.db).find_active().await?)
    }

    /// Applies a partial update.
    ///
    /// Setting `active: true` deactivates all sessions first, in the same transaction.
    /// `active: false` only clears this session's flag, which may leave no session active.
    ///
    /// # Returns
    /// - `Ok(())` - Session updated
    /// - `Err(AppError::NotFound)` - No session with that id; nothing was changed
    pub async fn update(&self, params: UpdateSessionParams) -> Result<(), AppError> {
        let session_id = params.session_id.clone();

        if params.active != Some(true) {
            let affected = SessionRepository::new(self.db).update(params).await?;
            if affected == 0 {
                return Err(session_not_found());
            }
            return Ok(());
        }

        let scope = self.lock.begin(self.db).await?;
        scope.repo().deactivate_all().await?;
        if scope.repo().update(params).await? == 0 {
            return Err(session_not_found());
        }
        scope.commit().await?;

        tracing::info!("Session {} activated by update", session_id);

        Ok(())
    }

    /// Makes `session_id` the only active session.
    ///
    /// Activating the already-active session leaves the state unchanged.
    ///
    /// # Returns
    /// - `Ok(())` - Target is active, every other session inactive
    /// - `Err(AppError::BadRequest)` - Blank session id
    /// - `Err(AppError::NotFound)` - Unknown session; nothing was changed
    pub async fn activate(&self, session_id: &str) -> Result<(), AppError> {
        let session_id = session_id.trim();
        if session_id.is_empty() {
            return Err(AppError::BadRequest("sessionId is required".to_string()));
        }

        let scope = self.lock.begin(self.db).await?;
        if scope.repo().find_by_id(session_id).await?.is_none() {
            return Err(session_not_found());
        }
        scope.repo().deactivate_all().await?;
        scope.repo().set_active(session_id).await?;
        scope.commit().await?;

        tracing::info!("Session {} activated", session_id);

        Ok(())
    }

    /// Deletes an inactive session.
    ///
    /// The check and the delete share the activation scope so the session cannot become
    /// active in between.
    ///
    /// # Returns
    /// - `Ok(())` - Session deleted
    /// - `Err(AppError::NotFound)` - Unknown session
    /// - `Err(AppError::StateConflict)` - Session is active
    pub async fn delete(&self, session_id: &str) -> Result<(), AppError> {
        let scope = self.lock.begin(self.db).await?;

        let session = scope
            .repo()
            .find_by_id(session_id)
            .await?
            .ok_or_else(session_not_found)?;

        if session.active {
            return Err(AppError::StateConflict(
                "Cannot delete an active session".to_string(),
            ));
        }

        if scope.repo().delete(session_id).await? == 0 {
            return Err(AppError::InternalError(format!(
                "Session {} vanished during delete",
                session_id
            )));
        }
        scope.commit().await?;

        tracing::info!("Session {} deleted", session_id);

        Ok(())
    }
}

fn session_not_found() -> AppError {
    AppError::NotFound("Session not found".to_string())
}
