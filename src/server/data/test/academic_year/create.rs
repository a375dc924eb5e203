use super::*;

/// Tests creating an academic year with a pre-generated id and color.
///
/// Expected: Ok(AcademicYear) holding the given id, color and name
#[tokio::test]
async fn creates_academic_year() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let year = AcademicYearRepository::new(db)
        .create("AY000001".to_string(), "#1A2B3C".to_string(), params("2024/2025"))
        .await?;

    assert_eq!(year.year_id, "AY000001");
    assert_eq!(year.year_color, "#1A2B3C");
    assert_eq!(year.name, "2024/2025");
    assert_eq!(year.created_by.as_deref(), Some("admin"));

    Ok(())
}

/// Tests that the store rejects a second year with the same name.
///
/// Expected: Err(DbErr) classified as a unique violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AcademicYearRepository::new(db);
    repo.create("AY000001".to_string(), "#000001".to_string(), params("2024/2025"))
        .await?;

    let result = repo
        .create("AY000002".to_string(), "#000002".to_string(), params("2024/2025"))
        .await;

    let err = result.unwrap_err();
    assert!(crate::server::error::is_unique_violation(&err));

    Ok(())
}
