use super::*;

/// Tests renaming an existing academic year.
///
/// Expected: Ok(1) and the new name persisted
#[tokio::test]
async fn renames_existing_year() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::create_academic_year(db).await?;
    let repo = AcademicYearRepository::new(db);

    let affected = repo.rename(&year.year_id, "Renamed".to_string()).await?;
    let stored = repo.find_by_id(&year.year_id).await?.unwrap();

    assert_eq!(affected, 1);
    assert_eq!(stored.name, "Renamed");

    Ok(())
}

/// Tests renaming and deleting an unknown academic year.
///
/// Expected: Ok(0) for both
#[tokio::test]
async fn reports_zero_rows_for_unknown_year() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AcademicYearRepository::new(db);

    assert_eq!(repo.rename("MISSING1", "X".to_string()).await?, 0);
    assert_eq!(repo.delete("MISSING1").await?, 0);

    Ok(())
}
