use super::*;

/// Tests the active lookup when no session is active.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_active_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_session(db).await?;

    assert!(SessionRepository::new(db).find_active().await?.is_none());

    Ok(())
}

/// Tests the active lookup returns the flagged session.
///
/// Expected: Ok(Some(session)) with active == true
#[tokio::test]
async fn returns_active_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_session(db).await?;
    let active = factory::session::create_active_session(db).await?;

    let found = SessionRepository::new(db).find_active().await?.unwrap();

    assert_eq!(found.session_id, active.session_id);
    assert!(found.active);

    Ok(())
}
