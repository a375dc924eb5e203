use super::*;

/// Tests the phone uniqueness check excludes the caller's own account.
///
/// Expected: taken for other accounts, free for the owner
#[tokio::test]
async fn excludes_own_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .phone(Some("0244111111"))
        .build()
        .await?;
    let other = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.phone_taken("0244111111", None).await?);
    assert!(repo.phone_taken("0244111111", Some(&other.user_id)).await?);
    assert!(!repo.phone_taken("0244111111", Some(&owner.user_id)).await?);
    assert!(!repo.phone_taken("0200000000", None).await?);

    Ok(())
}
