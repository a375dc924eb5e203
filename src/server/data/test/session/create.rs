use super::*;

/// Tests inserting a session linked to an academic year.
///
/// Expected: Ok(Session) carrying the year link and a native boolean active flag
#[tokio::test]
async fn creates_session_with_year_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::create_academic_year(db).await?;

    let session = SessionRepository::new(db)
        .create(
            "SE000001".to_string(),
            "#123456".to_string(),
            CreateSessionParams {
                academic_year: Some(year.name.clone()),
                year_id: Some(year.year_id.clone()),
                ..params("Term 1", true)
            },
        )
        .await?;

    assert_eq!(session.session_id, "SE000001");
    assert_eq!(session.title, "Term 1");
    assert_eq!(session.year_id, Some(year.year_id));
    assert!(session.active);

    Ok(())
}

/// Tests that two sessions cannot share a color.
///
/// Expected: Err(DbErr) classified as a unique violation
#[tokio::test]
async fn rejects_duplicate_color() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    repo.create("SE000001".to_string(), "#123456".to_string(), params("A", false))
        .await?;

    let err = repo
        .create("SE000002".to_string(), "#123456".to_string(), params("B", false))
        .await
        .unwrap_err();

    assert!(crate::server::error::is_unique_violation(&err));

    Ok(())
}
