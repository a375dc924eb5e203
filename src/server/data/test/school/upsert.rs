use super::*;

fn params(name: &str) -> UpsertSchoolParams {
    UpsertSchoolParams {
        name: name.to_string(),
        address: Some("P.O. Box 1".to_string()),
        contact1: None,
        contact2: None,
        email: None,
    }
}

/// Tests the school profile is absent until first saved.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_unset() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::School).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(SchoolRepository::new(db).get().await?.is_none());

    Ok(())
}

/// Tests repeated upserts keep a single row.
///
/// Expected: same id on both writes, latest name returned by get
#[tokio::test]
async fn updates_singleton_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::School).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SchoolRepository::new(db);
    let first = repo.upsert(params("Old Name")).await?;
    let second = repo.upsert(params("New Name")).await?;
    let stored = repo.get().await?.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(stored.name, "New Name");
    assert_eq!(
        entity::prelude::School::find().all(db).await?.len(),
        1
    );

    Ok(())
}
