use super::*;

/// Tests the public listing hides inactive businesses and sorts newest first.
///
/// Expected: only active businesses, newest first
#[tokio::test]
async fn lists_active_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::business::BusinessFactory::new(db)
        .created_seconds_ago(60)
        .build()
        .await?;
    let newer = factory::business::BusinessFactory::new(db)
        .created_seconds_ago(10)
        .build()
        .await?;
    factory::business::BusinessFactory::new(db)
        .active(false)
        .build()
        .await?;

    let businesses = BusinessRepository::new(db).get_active().await?;
    let ids: Vec<_> = businesses.iter().map(|b| b.business_id.as_str()).collect();

    assert_eq!(ids, vec![newer.business_id.as_str(), older.business_id.as_str()]);

    Ok(())
}

/// Tests the owner listing includes inactive businesses.
///
/// Expected: both of the owner's businesses, none of another owner's
#[tokio::test]
async fn owner_listing_includes_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::business::BusinessFactory::new(db)
        .user_id("USR0000001")
        .build()
        .await?;
    factory::business::BusinessFactory::new(db)
        .user_id("USR0000001")
        .active(false)
        .build()
        .await?;
    factory::business::BusinessFactory::new(db)
        .user_id("USR0000002")
        .build()
        .await?;

    let owned = BusinessRepository::new(db)
        .get_by_user_id("USR0000001")
        .await?;

    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|b| b.user_id == "USR0000001"));

    Ok(())
}
