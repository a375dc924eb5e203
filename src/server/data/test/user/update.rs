use super::*;

/// Tests the admin update overwrites optional columns and keeps is_active when omitted.
///
/// Expected: Ok(1), cleared phone, unchanged active flag
#[tokio::test]
async fn overwrites_optional_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .phone(Some("0244333333"))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let affected = repo
        .update(UpdateUserParams {
            user_id: user.user_id.clone(),
            name: "Renamed".to_string(),
            phone: None,
            member: true,
            country: Some("Ghana".to_string()),
            area: None,
            district: None,
            local_assembly: None,
            profile_url: None,
            is_active: None,
        })
        .await?;

    let stored = repo.find_by_user_id(&user.user_id).await?.unwrap();

    assert_eq!(affected, 1);
    assert_eq!(stored.name, "Renamed");
    assert!(stored.phone.is_none());
    assert!(stored.member);
    assert!(stored.is_active);

    Ok(())
}

/// Tests toggling and deleting by public id.
///
/// Expected: Ok(1) for a known user, Ok(0) once deleted
#[tokio::test]
async fn toggles_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert_eq!(repo.set_active(&user.user_id, false).await?, 1);
    assert!(!repo.find_by_user_id(&user.user_id).await?.unwrap().is_active);

    assert_eq!(repo.delete(&user.user_id).await?, 1);
    assert_eq!(repo.delete(&user.user_id).await?, 0);

    Ok(())
}
