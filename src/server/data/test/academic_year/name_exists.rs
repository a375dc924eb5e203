use super::*;

/// Tests name lookup with and without excluding the year being renamed.
///
/// Expected: true for another year's name, false when the only match is excluded
#[tokio::test]
async fn respects_exclusion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_session_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let year = factory::academic_year::AcademicYearFactory::new(db)
        .name("2024/2025")
        .build()
        .await?;

    let repo = AcademicYearRepository::new(db);

    assert!(repo.name_exists("2024/2025", None).await?);
    assert!(!repo.name_exists("2024/2025", Some(&year.year_id)).await?);
    assert!(!repo.name_exists("2030/2031", None).await?);

    Ok(())
}
