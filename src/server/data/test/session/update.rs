use super::*;

/// Tests a partial update only touches the provided columns.
///
/// Expected: Ok(1), title changed, year link and active flag untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::create_academic_year(db).await?;
    let session = factory::session::SessionFactory::new(db)
        .year(&year)
        .active(true)
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let affected = repo
        .update(UpdateSessionParams {
            session_id: session.session_id.clone(),
            title: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await?;

    let stored = repo.find_by_id(&session.session_id).await?.unwrap();

    assert_eq!(affected, 1);
    assert_eq!(stored.title, "Renamed");
    assert_eq!(stored.year_id, Some(year.year_id));
    assert!(stored.active);

    Ok(())
}

/// Tests an empty patch reports whether the session exists.
///
/// Expected: Ok(1) for a known id, Ok(0) for an unknown one
#[tokio::test]
async fn empty_patch_reports_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let session = factory::create_session(db).await?;
    let repo = SessionRepository::new(db);

    let known = repo
        .update(UpdateSessionParams {
            session_id: session.session_id.clone(),
            ..Default::default()
        })
        .await?;
    let unknown = repo
        .update(UpdateSessionParams {
            session_id: "MISSING1".to_string(),
            ..Default::default()
        })
        .await?;

    assert_eq!(known, 1);
    assert_eq!(unknown, 0);

    Ok(())
}
