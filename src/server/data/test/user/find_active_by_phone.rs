use super::*;

/// Tests the phone lookup returns the pending OTP alongside the user.
///
/// Expected: Ok(Some((user, Some(otp), Some(expiry))))
#[tokio::test]
async fn returns_pending_otp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .phone(Some("0244000001"))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let expires = Utc::now() + Duration::minutes(5);
    repo.set_otp(user.id, "12345".to_string(), expires).await?;

    let (found, otp, otp_expires) = repo.find_active_by_phone("0244000001").await?.unwrap();

    assert_eq!(found.user_id, user.user_id);
    assert_eq!(otp.as_deref(), Some("12345"));
    assert!(otp_expires.is_some());

    Ok(())
}

/// Tests inactive accounts are ignored by the phone lookup.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_inactive_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .phone(Some("0244000002"))
        .active(false)
        .build()
        .await?;

    assert!(UserRepository::new(db)
        .find_active_by_phone("0244000002")
        .await?
        .is_none());

    Ok(())
}

/// Tests verifying a phone clears the OTP.
///
/// Expected: phone_verified set and no OTP left on the row
#[tokio::test]
async fn mark_phone_verified_clears_otp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .phone(Some("0244000003"))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.set_otp(user.id, "54321".to_string(), Utc::now() + Duration::minutes(5))
        .await?;

    let verified = repo.mark_phone_verified(user.id).await?.unwrap();
    let (_, otp, otp_expires) = repo.find_active_by_phone("0244000003").await?.unwrap();

    assert!(verified.phone_verified);
    assert!(otp.is_none());
    assert!(otp_expires.is_none());

    Ok(())
}
