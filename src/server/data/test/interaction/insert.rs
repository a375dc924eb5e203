use super::*;

/// Tests inserting, checking and removing a like.
///
/// Expected: exists after insert, gone after remove, second remove affects no rows
#[tokio::test]
async fn inserts_and_removes_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let repo = InteractionRepository::new(db);

    repo.insert(InteractionKind::Like, &business.business_id, "USR0000001")
        .await?;

    assert!(repo
        .exists(InteractionKind::Like, &business.business_id, "USR0000001")
        .await?);
    assert!(!repo
        .exists(InteractionKind::Save, &business.business_id, "USR0000001")
        .await?);

    assert_eq!(
        repo.remove(InteractionKind::Like, &business.business_id, "USR0000001")
            .await?,
        1
    );
    assert_eq!(
        repo.remove(InteractionKind::Like, &business.business_id, "USR0000001")
            .await?,
        0
    );

    Ok(())
}

/// Tests the pair key rejects a duplicate save.
///
/// Expected: Err(DbErr) classified as a unique violation
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let repo = InteractionRepository::new(db);

    repo.insert(InteractionKind::Save, &business.business_id, "USR0000001")
        .await?;
    let err = repo
        .insert(InteractionKind::Save, &business.business_id, "USR0000001")
        .await
        .unwrap_err();

    assert!(crate::server::error::is_unique_violation(&err));

    Ok(())
}
