use super::*;

/// Tests clearing every active flag.
///
/// Expected: Ok(n) where n is the number of previously active rows, none left active
#[tokio::test]
async fn clears_every_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::session::create_active_session(db).await?;
    factory::session::create_active_session(db).await?;
    factory::create_session(db).await?;

    let repo = SessionRepository::new(db);
    let cleared = repo.deactivate_all().await?;

    assert_eq!(cleared, 2);
    assert!(repo.get_active().await?.is_empty());

    Ok(())
}

/// Tests activating a single session by id.
///
/// Expected: Ok(1) for a known id, Ok(0) for an unknown one
#[tokio::test]
async fn set_active_reports_affected_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let session = factory::create_session(db).await?;
    let repo = SessionRepository::new(db);

    assert_eq!(repo.set_active(&session.session_id).await?, 1);
    assert_eq!(repo.set_active("MISSING1").await?, 0);
    assert!(repo.find_by_id(&session.session_id).await?.unwrap().active);

    Ok(())
}
