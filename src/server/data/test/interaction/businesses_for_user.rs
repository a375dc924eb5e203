use super::*;

/// Tests liked businesses are ordered by when they were liked, not when they were created.
///
/// Expected: most recently liked business first, other users' likes excluded
#[tokio::test]
async fn orders_by_interaction_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::business::BusinessFactory::new(db)
        .created_seconds_ago(300)
        .build()
        .await?;
    let second = factory::business::BusinessFactory::new(db)
        .created_seconds_ago(10)
        .build()
        .await?;

    factory::interaction::create_like(db, &second.business_id, "USR0000001", 120).await?;
    factory::interaction::create_like(db, &first.business_id, "USR0000001", 5).await?;
    factory::interaction::create_like(db, &second.business_id, "USR0000002", 1).await?;

    let liked = InteractionRepository::new(db)
        .businesses_for_user(InteractionKind::Like, "USR0000001")
        .await?;
    let ids: Vec<_> = liked.iter().map(|b| b.business_id.as_str()).collect();

    assert_eq!(ids, vec![first.business_id.as_str(), second.business_id.as_str()]);

    Ok(())
}

/// Tests the saved list is independent of likes.
///
/// Expected: empty saved list for a user who only liked
#[tokio::test]
async fn saved_list_ignores_likes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    factory::interaction::create_like(db, &business.business_id, "USR0000001", 0).await?;

    let saved = InteractionRepository::new(db)
        .businesses_for_user(InteractionKind::Save, "USR0000001")
        .await?;

    assert!(saved.is_empty());

    Ok(())
}
