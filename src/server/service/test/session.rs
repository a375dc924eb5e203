use super::*;
use crate::server::{
    data::session::SessionRepository,
    model::session::{CreateSessionParams, UpdateSessionParams},
    service::session::SessionService,
};
use sea_orm::DatabaseConnection;
use std::time::Duration;

fn params(title: &str, active: bool) -> CreateSessionParams {
    CreateSessionParams {
        title: title.to_string(),
        academic_year: None,
        year_id: None,
        active,
        year_colors: None,
        created_by: None,
    }
}

async fn active_ids(db: &DatabaseConnection) -> Result<Vec<String>, AppError> {
    Ok(SessionRepository::new(db)
        .get_active()
        .await?
        .into_iter()
        .map(|s| s.session_id)
        .collect())
}

/// Tests creating an active session deactivates the previous one.
///
/// Expected: only the newest session is active
#[tokio::test]
async fn create_active_replaces_previous() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();
    let service = SessionService::new(db, &lock);

    let first = service.create(params("Term 1", true)).await?;
    let second = service.create(params("Term 2", true)).await?;

    assert_eq!(active_ids(db).await?, vec![second.session_id.clone()]);
    assert!(!service.get_by_id(&first.session_id).await?.active);

    Ok(())
}

/// Tests creating an inactive session leaves the active one alone.
///
/// Expected: the existing active session stays active
#[tokio::test]
async fn create_inactive_keeps_active() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();
    let service = SessionService::new(db, &lock);

    let active = service.create(params("Term 1", true)).await?;
    service.create(params("Term 2", false)).await?;

    assert_eq!(active_ids(db).await?, vec![active.session_id]);

    Ok(())
}

/// Tests an update setting `active: true` deactivates the others.
///
/// Expected: only the updated session is active
#[tokio::test]
async fn update_to_active_is_exclusive() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();
    let service = SessionService::new(db, &lock);

    service.create(params("Term 1", true)).await?;
    let target = service.create(params("Term 2", false)).await?;

    service
        .update(UpdateSessionParams {
            session_id: target.session_id.clone(),
            active: Some(true),
            ..Default::default()
        })
        .await?;

    assert_eq!(active_ids(db).await?, vec![target.session_id]);

    Ok(())
}

/// Tests an update to an unknown session with `active: true` changes nothing.
///
/// Expected: Err(NotFound) and the previous active session still active
#[tokio::test]
async fn update_unknown_rolls_back_deactivation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();
    let service = SessionService::new(db, &lock);

    let active = service.create(params("Term 1", true)).await?;

    let result = service
        .update(UpdateSessionParams {
            session_id: "MISSING1".to_string(),
            active: Some(true),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(active_ids(db).await?, vec![active.session_id]);

    Ok(())
}

/// Tests activating the already active session.
///
/// Expected: Ok(()) and the same single active session
#[tokio::test]
async fn activate_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();
    let service = SessionService::new(db, &lock);

    let session = service.create(params("Term 1", true)).await?;

    service.activate(&session.session_id).await?;
    service.activate(&session.session_id).await?;

    assert_eq!(active_ids(db).await?, vec![session.session_id]);

    Ok(())
}

/// Tests activation input validation.
///
/// Expected: Err(BadRequest) for a blank id, Err(NotFound) for an unknown id
#[tokio::test]
async fn activate_rejects_blank_and_unknown() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();
    let service = SessionService::new(db, &lock);

    assert!(matches!(
        service.activate("  ").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.activate("MISSING1").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests concurrent activations of distinct sessions.
///
/// Expected: exactly one session active once every activation has finished
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_activations_leave_one_active() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();

    let mut ids = Vec::new();
    for _ in 0..8 {
        ids.push(factory::create_session(db).await?.session_id);
    }

    let handles: Vec<_> = ids
        .iter()
        .cloned()
        .map(|id| {
            let db = db.clone();
            let lock = lock.clone();
            tokio::spawn(async move { SessionService::new(&db, &lock).activate(&id).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap()?;
    }

    let active = active_ids(db).await?;
    assert_eq!(active.len(), 1);
    assert!(ids.contains(&active[0]));

    Ok(())
}

/// Tests that an open activation scope holds off a second one.
///
/// The second scope targets a separate database so only the lock can make it wait.
///
/// Expected: the second `begin` stays pending until the first scope commits
#[tokio::test]
async fn activation_lock_serializes_scopes() -> Result<(), AppError> {
    let first = TestBuilder::new().with_session_tables().build().await.unwrap();
    let second = TestBuilder::new().with_session_tables().build().await.unwrap();
    let lock = ActivationLock::default();

    let scope = lock.begin(first.db.as_ref().unwrap()).await?;

    let waiting = tokio::time::timeout(
        Duration::from_millis(100),
        lock.begin(second.db.as_ref().unwrap()),
    )
    .await;
    assert!(waiting.is_err());

    scope.commit().await?;

    let next = tokio::time::timeout(
        Duration::from_secs(5),
        lock.begin(second.db.as_ref().unwrap()),
    )
    .await
    .expect("lock released after commit")?;
    next.commit().await?;

    Ok(())
}

/// Tests queued create-active, update-to-active and activate calls.
///
/// The calls queue behind a held scope in that order and the lock grants them in
/// arrival order.
///
/// Expected: the session targeted by the last activation to commit is the only active one
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn queued_activations_apply_in_lock_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let gate = TestBuilder::new().build().await.unwrap();
    let lock = ActivationLock::default();

    let updated = factory::create_session(db).await?;
    let activated = factory::create_session(db).await?;

    let held = lock.begin(gate.db.as_ref().unwrap()).await?;
    let mut handles = Vec::new();

    handles.push({
        let (db, lock) = (db.clone(), lock.clone());
        tokio::spawn(async move {
            SessionService::new(&db, &lock)
                .create(params("Term 3", true))
                .await
                .map(|_| ())
        })
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    handles.push({
        let (db, lock) = (db.clone(), lock.clone());
        let session_id = updated.session_id.clone();
        tokio::spawn(async move {
            SessionService::new(&db, &lock)
                .update(UpdateSessionParams {
                    session_id,
                    active: Some(true),
                    ..Default::default()
                })
                .await
        })
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    handles.push({
        let (db, lock) = (db.clone(), lock.clone());
        let session_id = activated.session_id.clone();
        tokio::spawn(async move { SessionService::new(&db, &lock).activate(&session_id).await })
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    held.commit().await?;
    for handle in handles {
        handle.await.unwrap()?;
    }

    assert_eq!(active_ids(db).await?, vec![activated.session_id]);

    Ok(())
}

/// Tests the delete guard.
///
/// Expected: Err(StateConflict) for the active session with the row kept,
/// Err(NotFound) for an unknown id, Ok(()) for an inactive session
#[tokio::test]
async fn delete_refuses_active_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();
    let service = SessionService::new(db, &lock);

    let active = service.create(params("Term 1", true)).await?;
    let inactive = service.create(params("Term 2", false)).await?;

    assert!(matches!(
        service.delete(&active.session_id).await,
        Err(AppError::StateConflict(_))
    ));
    assert!(service.get_by_id(&active.session_id).await.is_ok());

    assert!(matches!(
        service.delete("MISSING1").await,
        Err(AppError::NotFound(_))
    ));

    service.delete(&inactive.session_id).await?;
    assert!(matches!(
        service.get_by_id(&inactive.session_id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests the active lookup with no active session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_active_allows_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();
    let service = SessionService::new(db, &lock);

    service.create(params("Term 1", false)).await?;

    assert!(service.get_active().await?.is_none());

    Ok(())
}

/// Walks the term rollover an administrator performs at the start of a year.
///
/// Expected: each step leaves at most one active session and the guard blocks only the
/// active one
#[tokio::test]
async fn term_rollover_scenario() -> Result<(), AppError> {
    use crate::server::{
        model::academic_year::CreateAcademicYearParams,
        service::academic_year::AcademicYearService,
    };

    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lock = ActivationLock::default();
    let years = AcademicYearService::new(db);
    let sessions = SessionService::new(db, &lock);

    let year_params = CreateAcademicYearParams {
        name: "2024/2025".to_string(),
        start_date: None,
        end_date: None,
        created_by: None,
    };
    let year = years.create(year_params.clone()).await?;
    assert!(matches!(
        years.create(year_params).await,
        Err(AppError::Conflict(_))
    ));

    let in_year = |title: &str, active: bool| CreateSessionParams {
        academic_year: Some(year.name.clone()),
        year_id: Some(year.year_id.clone()),
        ..params(title, active)
    };

    let term1 = sessions.create(in_year("Term 1", true)).await?;
    assert_eq!(active_ids(db).await?, vec![term1.session_id.clone()]);

    let term2 = sessions.create(in_year("Term 2", true)).await?;
    assert_eq!(active_ids(db).await?, vec![term2.session_id.clone()]);

    assert!(matches!(
        sessions.delete(&term2.session_id).await,
        Err(AppError::StateConflict(_))
    ));

    sessions.activate(&term1.session_id).await?;
    assert_eq!(active_ids(db).await?, vec![term1.session_id.clone()]);

    sessions.delete(&term2.session_id).await?;
    let remaining: Vec<_> = sessions
        .get_all()
        .await?
        .into_iter()
        .map(|s| s.session_id)
        .collect();
    assert_eq!(remaining, vec![term1.session_id]);

    Ok(())
}
