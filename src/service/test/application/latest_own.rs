use super::*;
use chrono::{Duration, Utc};

/// Tests that the actor's newest application in the category is returned.
///
/// Verifies that an earlier rejected application does not shadow the
/// current pending one.
///
/// Expected: Ok(Application) with the newest submission
#[tokio::test]
async fn returns_newest_own_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    factory::application::ApplicationFactory::new(db, 76561198000000001)
        .status("AFVIST")
        .created_at(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let current = factory::application::ApplicationFactory::new(db, 76561198000000001)
        .build()
        .await?;
    let actor = whitelisted_actor(76561198000000001);

    let application = ApplicationService::new(db)
        .latest_own(&actor, Category::Whitelist)
        .await?;

    assert_eq!(application.id, current.id);
    assert_eq!(application.status, ApplicationStatus::Afventer);

    Ok(())
}

/// Tests the lookup when the actor never applied in the category.
///
/// The actor holds a police application, so the miss is category-scoped.
///
/// Expected: Err(AppError::NotFound) naming the category
#[tokio::test]
async fn returns_not_found_when_never_applied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    factory::create_application_with_status(db, 76561198000000001, "police", "AFVENTER").await?;
    let actor = whitelisted_actor(76561198000000001);

    let result = ApplicationService::new(db)
        .latest_own(&actor, Category::Whitelist)
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::NotFound(message) => {
            assert_eq!(message, "No whitelist application found");
        }
        e => panic!("Expected NotFound error, got: {:?}", e),
    }

    Ok(())
}
