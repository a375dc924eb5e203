use super::*;

/// Tests the like counter goes up and down.
///
/// Expected: 2 after two increments, 1 after one decrement
#[tokio::test]
async fn increments_and_decrements() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let repo = BusinessRepository::new(db);

    repo.increment_counter(&business.business_id, InteractionKind::Like)
        .await?;
    repo.increment_counter(&business.business_id, InteractionKind::Like)
        .await?;
    repo.decrement_counter(&business.business_id, InteractionKind::Like)
        .await?;

    let stored = repo.find_by_id(&business.business_id).await?.unwrap();
    assert_eq!(stored.liked, 1);
    assert_eq!(stored.saved, 0);

    Ok(())
}

/// Tests the counter never goes below zero.
///
/// Expected: Ok(0) rows affected and the counter still 0
#[tokio::test]
async fn floors_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let repo = BusinessRepository::new(db);

    let affected = repo
        .decrement_counter(&business.business_id, InteractionKind::Save)
        .await?;

    assert_eq!(affected, 0);
    assert_eq!(repo.find_by_id(&business.business_id).await?.unwrap().saved, 0);

    Ok(())
}
