use super::*;

/// Tests a profile patch only writes the provided fields.
///
/// Expected: Ok(1), name changed, phone untouched
#[tokio::test]
async fn writes_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .phone(Some("0244222222"))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let affected = repo
        .update_profile(UpdateProfileParams {
            user_id: user.user_id.clone(),
            name: Some("Efua Owusu".to_string()),
            district: Some("Tema".to_string()),
            ..Default::default()
        })
        .await?;

    let stored = repo.find_by_user_id(&user.user_id).await?.unwrap();

    assert_eq!(affected, 1);
    assert_eq!(stored.name, "Efua Owusu");
    assert_eq!(stored.district.as_deref(), Some("Tema"));
    assert_eq!(stored.phone.as_deref(), Some("0244222222"));

    Ok(())
}

/// Tests a profile patch against an unknown user.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let affected = UserRepository::new(db)
        .update_profile(UpdateProfileParams {
            user_id: "MISSING000".to_string(),
            name: Some("Nobody".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(affected, 0);

    Ok(())
}
