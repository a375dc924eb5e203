use super::*;

/// Tests inserting a user stores the hash rather than the plaintext password.
///
/// Expected: Ok(User) active and unverified, credentials carrying the given hash
#[tokio::test]
async fn stores_hash_not_plaintext() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "USR0000001".to_string(),
            "$2b$04$hash".to_string(),
            params("kofi@example.com", Some("0244123456")),
        )
        .await?;

    assert!(user.is_active);
    assert!(!user.phone_verified);

    let credentials = repo
        .find_credentials_by_user_id("USR0000001")
        .await?
        .unwrap();
    assert_eq!(credentials.password_hash, "$2b$04$hash");

    Ok(())
}

/// Tests the store rejects a second account with the same email.
///
/// Expected: Err(DbErr) classified as a unique violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("kofi@example.com")
        .build()
        .await?;

    let err = UserRepository::new(db)
        .create(
            "USR0000002".to_string(),
            "hash".to_string(),
            params("kofi@example.com", None),
        )
        .await
        .unwrap_err();

    assert!(crate::server::error::is_unique_violation(&err));

    Ok(())
}
