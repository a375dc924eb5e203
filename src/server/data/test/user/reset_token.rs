use super::*;

/// Tests the reset digest lookup honours the deadline.
///
/// Expected: found before expiry, not found after
#[tokio::test]
async fn finds_digest_until_expiry() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let expires = Utc::now() + Duration::minutes(15);
    repo.set_reset_token(user.id, "digest".to_string(), expires)
        .await?;

    assert!(repo
        .find_by_reset_digest("digest", Utc::now())
        .await?
        .is_some());
    assert!(repo
        .find_by_reset_digest("digest", expires + Duration::seconds(1))
        .await?
        .is_none());
    assert!(repo
        .find_by_reset_digest("other", Utc::now())
        .await?
        .is_none());

    Ok(())
}

/// Tests resetting the password invalidates the token.
///
/// Expected: new hash stored, digest no longer found
#[tokio::test]
async fn reset_password_clears_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_reset_token(user.id, "digest".to_string(), Utc::now() + Duration::minutes(15))
        .await?;
    repo.reset_password(user.id, "new-hash".to_string()).await?;

    let credentials = repo
        .find_credentials_by_user_id(&user.user_id)
        .await?
        .unwrap();

    assert_eq!(credentials.password_hash, "new-hash");
    assert!(repo
        .find_by_reset_digest("digest", Utc::now())
        .await?
        .is_none());

    Ok(())
}
