use super::*;

/// Tests that a first-time applicant may submit to the whitelist.
///
/// Expected: Ok
#[tokio::test]
async fn allows_first_whitelist_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;

    let result = EligibilityGate::new(db)
        .can_submit(&actor(76561198000000001, false), Category::Whitelist)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a pending whitelist application blocks another one.
///
/// Expected: Err(AlreadyApplied)
#[tokio::test]
async fn blocks_pending_whitelist_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    factory::create_application_with_status(db, 76561198000000001, "whitelist", "AFVENTER")
        .await?;

    let result = EligibilityGate::new(db)
        .can_submit(&actor(76561198000000001, false), Category::Whitelist)
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::ApplicationErr(ApplicationError::AlreadyApplied(category)) => {
            assert_eq!(category, Category::Whitelist);
        }
        e => panic!("Expected AlreadyApplied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that an approved whitelist does not block a new submission.
///
/// An approval is a standing credential there, not a held seat.
///
/// Expected: Ok
#[tokio::test]
async fn allows_reapplication_after_whitelist_approval() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    factory::create_application_with_status(db, 76561198000000001, "whitelist", "GODKENDT")
        .await?;

    let result = EligibilityGate::new(db)
        .can_submit(&actor(76561198000000001, true), Category::Whitelist)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a rejected whitelist application allows another try.
///
/// Expected: Ok
#[tokio::test]
async fn allows_reapplication_after_rejection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    factory::create_application_with_status(db, 76561198000000001, "whitelist", "AFVIST").await?;

    let result = EligibilityGate::new(db)
        .can_submit(&actor(76561198000000001, false), Category::Whitelist)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that police submissions are closed to unlisted players.
///
/// Expected: Err(WhitelistRequired)
#[tokio::test]
async fn requires_whitelist_for_police() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;

    let result = EligibilityGate::new(db)
        .can_submit(&actor(76561198000000001, false), Category::Police)
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::ApplicationErr(ApplicationError::WhitelistRequired(category)) => {
            assert_eq!(category, Category::Police);
        }
        e => panic!("Expected WhitelistRequired error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that an approved police application keeps blocking.
///
/// Holding the seat means no new application, unlike the whitelist.
///
/// Expected: Err(AlreadyApplied)
#[tokio::test]
async fn blocks_approved_police_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    factory::create_application_with_status(db, 76561198000000001, "police", "GODKENDT").await?;

    let result = EligibilityGate::new(db)
        .can_submit(&actor(76561198000000001, true), Category::Police)
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::ApplicationErr(ApplicationError::AlreadyApplied(category)) => {
            assert_eq!(category, Category::Police);
        }
        e => panic!("Expected AlreadyApplied error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that a rejected police application frees the applicant to retry.
///
/// Expected: Ok
#[tokio::test]
async fn allows_police_retry_after_rejection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    factory::create_application_with_status(db, 76561198000000001, "police", "AFVIST").await?;

    let result = EligibilityGate::new(db)
        .can_submit(&actor(76561198000000001, true), Category::Police)
        .await;

    assert!(result.is_ok());

    Ok(())
}
