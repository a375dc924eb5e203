use super::*;

/// Tests that academic years are listed newest first.
///
/// Expected: Ok(Vec) ordered by created_at descending
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::academic_year::AcademicYearFactory::new(db)
        .name("2023/2024")
        .build()
        .await?;
    let newer = AcademicYearRepository::new(db)
        .create("AY000009".to_string(), "#ABCDEF".to_string(), params("2024/2025"))
        .await?;

    let years = AcademicYearRepository::new(db).get_all().await?;

    assert_eq!(years.len(), 2);
    assert_eq!(years[0].year_id, newer.year_id);
    assert_eq!(years[1].year_id, older.year_id);

    Ok(())
}
