use super::*;

/// Tests a partial update keeps fields that were not provided.
///
/// Expected: Ok(1), title and region changed, category untouched
#[tokio::test]
async fn keeps_unspecified_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::BusinessFactory::new(db)
        .category("Retail")
        .build()
        .await?;

    let repo = BusinessRepository::new(db);
    let affected = repo
        .update(UpdateBusinessParams {
            business_id: business.business_id.clone(),
            title: Some("New Title".to_string()),
            details: BusinessDetails {
                region: Some("Ashanti".to_string()),
                ..Default::default()
            },
        })
        .await?;

    let stored = repo.find_by_id(&business.business_id).await?.unwrap();

    assert_eq!(affected, 1);
    assert_eq!(stored.title, "New Title");
    assert_eq!(stored.details.region.as_deref(), Some("Ashanti"));
    assert_eq!(stored.details.category.as_deref(), Some("Retail"));

    Ok(())
}

/// Tests the verify and active toggles.
///
/// Expected: flags written, Ok(0) for an unknown id
#[tokio::test]
async fn toggles_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let repo = BusinessRepository::new(db);

    assert_eq!(repo.set_verified(&business.business_id, true).await?, 1);
    assert_eq!(repo.set_active(&business.business_id, false).await?, 1);
    assert_eq!(repo.set_active("MISSING000", false).await?, 0);

    let stored = repo.find_by_id(&business.business_id).await?.unwrap();
    assert!(stored.verified);
    assert!(!stored.active);

    Ok(())
}
