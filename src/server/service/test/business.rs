use super::*;
use crate::server::{
    model::business::{BusinessDetails, CreateBusinessParams, UpdateBusinessParams},
    service::business::BusinessService,
};

fn patch(business_id: &str) -> UpdateBusinessParams {
    UpdateBusinessParams {
        business_id: business_id.to_string(),
        title: None,
        details: BusinessDetails::default(),
    }
}

/// Tests creating a listing.
///
/// Expected: a 10-character id, active and unverified with zero counters
#[tokio::test]
async fn creates_active_unverified_listing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = BusinessService::new(db)
        .create(CreateBusinessParams {
            user_id: "OWNER00001".to_string(),
            title: "Kofi's Kitchen".to_string(),
            details: BusinessDetails {
                category: Some("Food".to_string()),
                ..Default::default()
            },
        })
        .await?;

    assert_eq!(business.business_id.len(), 10);
    assert!(business.active);
    assert!(!business.verified);
    assert_eq!((business.liked, business.saved), (0, 0));
    assert_eq!(business.details.category.as_deref(), Some("Food"));

    Ok(())
}

/// Tests an update that carries no fields.
///
/// Expected: Err(BadRequest) before the database is touched
#[tokio::test]
async fn rejects_empty_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;

    let result = BusinessService::new(db).update(patch(&business.business_id)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a partial update.
///
/// Expected: the title changes and other fields keep their values
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = BusinessService::new(db);

    let business = factory::business::BusinessFactory::new(db)
        .category("Retail")
        .build()
        .await?;

    let mut params = patch(&business.business_id);
    params.title = Some("Renamed".to_string());
    service.update(params).await?;

    let updated = service.get_by_id(&business.business_id).await?;
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.details.category.as_deref(), Some("Retail"));

    Ok(())
}

/// Tests status toggles without a status value.
///
/// Expected: Err(BadRequest) for both verify and active toggles
#[tokio::test]
async fn toggles_require_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = BusinessService::new(db);

    let business = factory::create_business(db).await?;

    assert!(matches!(
        service.set_verified(&business.business_id, None).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.set_active(&business.business_id, None).await,
        Err(AppError::BadRequest(_))
    ));

    assert!(service.set_verified(&business.business_id, Some(true)).await?);
    assert!(service.get_by_id(&business.business_id).await?.verified);

    Ok(())
}

/// Tests that deactivated listings leave the public list.
///
/// Expected: only the active listing is returned
#[tokio::test]
async fn deactivated_listing_leaves_public_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = BusinessService::new(db);

    let kept = factory::create_business(db).await?;
    let hidden = factory::create_business(db).await?;

    service.set_active(&hidden.business_id, Some(false)).await?;

    let listed = service.get_active().await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].business_id, kept.business_id);

    Ok(())
}

/// Tests operations on an unknown listing.
///
/// Expected: Err(NotFound) for get, update, toggles and delete
#[tokio::test]
async fn unknown_listing_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = BusinessService::new(db);

    let mut params = patch("NOPE000000");
    params.title = Some("Anything".to_string());

    assert!(matches!(service.get_by_id("NOPE000000").await, Err(AppError::NotFound(_))));
    assert!(matches!(service.update(params).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        service.set_active("NOPE000000", Some(true)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(service.delete("NOPE000000").await, Err(AppError::NotFound(_))));

    Ok(())
}
