use super::*;

/// Tests resolving a logged-in user with a standing whitelist approval.
///
/// Verifies that the guard combines the stored user row with the derived
/// whitelist flag.
///
/// Expected: Some(CurrentUser) with whitelisted true
#[tokio::test]
async fn resolves_user_with_whitelist_flag() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .steam_id(76561198000000001)
        .name("Anna")
        .build()
        .await?;
    factory::application::create_application_with_status(
        db,
        76561198000000001,
        "whitelist",
        "GODKENDT",
    )
    .await?;

    AuthSession::new(session).set_steam_id(76561198000000001).await?;

    let current = AuthGuard::new(db, session).current_user().await;

    let current = current.expect("user should resolve");
    assert_eq!(current.steam_id, 76561198000000001);
    assert_eq!(current.name, user.name);
    assert_eq!(current.role, Role::Normal);
    assert!(current.whitelisted);

    Ok(())
}

/// Tests that a pending whitelist application does not set the flag.
///
/// Verifies that only a GODKENDT whitelist application makes a user
/// whitelisted.
///
/// Expected: Some(CurrentUser) with whitelisted false
#[tokio::test]
async fn whitelist_flag_false_without_approval() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    factory::application::create_application_with_status(
        db,
        76561198000000001,
        "whitelist",
        "AFVENTER",
    )
    .await?;

    AuthSession::new(session).set_steam_id(76561198000000001).await?;

    let current = AuthGuard::new(db, session)
        .current_user()
        .await
        .expect("user should resolve");

    assert!(!current.whitelisted);

    Ok(())
}

/// Tests that the whitelist flag is re-derived on every resolution.
///
/// Verifies that an approval granted after login is visible on the next
/// request without a fresh login.
///
/// Expected: whitelisted flips from false to true across calls
#[tokio::test]
async fn rederives_whitelist_after_approval() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    let application = factory::application::create_application(db, 76561198000000001).await?;

    AuthSession::new(session).set_steam_id(76561198000000001).await?;

    let guard = AuthGuard::new(db, session);
    let before = guard.current_user().await.expect("user should resolve");
    assert!(!before.whitelisted);

    ApplicationRepository::new(db)
        .update_status(application.id, ApplicationStatus::Godkendt)
        .await?;

    let after = guard.current_user().await.expect("user should resolve");
    assert!(after.whitelisted);

    Ok(())
}

/// Tests resolution with no login in the session.
///
/// Expected: None
#[tokio::test]
async fn returns_none_without_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let current = AuthGuard::new(db, session).current_user().await;

    assert!(current.is_none());

    Ok(())
}

/// Tests resolution when the session references a deleted user.
///
/// Verifies that a stale session degrades to anonymous rather than
/// erroring.
///
/// Expected: None
#[tokio::test]
async fn returns_none_when_user_row_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_steam_id(76561198000000001).await?;

    let current = AuthGuard::new(db, session).current_user().await;

    assert!(current.is_none());

    Ok(())
}
