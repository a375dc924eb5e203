use super::*;

/// Tests inserting a listing.
///
/// Expected: Ok(Business) active, unverified, with zeroed counters
#[tokio::test]
async fn creates_active_unverified_business() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = BusinessRepository::new(db)
        .create(
            "BUS0000001".to_string(),
            CreateBusinessParams {
                user_id: "USR0000001".to_string(),
                title: "Mama's Kitchen".to_string(),
                details: BusinessDetails {
                    category: Some("Food".to_string()),
                    ..Default::default()
                },
            },
        )
        .await?;

    assert_eq!(business.business_id, "BUS0000001");
    assert_eq!(business.details.category.as_deref(), Some("Food"));
    assert!(business.active);
    assert!(!business.verified);
    assert_eq!((business.liked, business.saved), (0, 0));

    Ok(())
}
