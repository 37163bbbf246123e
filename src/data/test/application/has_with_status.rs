use super::*;

/// Tests the probe when a matching application exists.
///
/// Verifies that a pending application is found when probing for
/// `AFVENTER` in its category.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_status_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _application) = factory::helpers::create_user_with_application(db).await?;
    let steam_id = user.steam_id.parse::<u64>().unwrap();

    let result = ApplicationRepository::new(db)
        .has_with_status(steam_id, Category::Whitelist, &[ApplicationStatus::Afventer])
        .await?;

    assert!(result);

    Ok(())
}

/// Tests the probe against a non-matching status.
///
/// Verifies that a rejected application does not register when probing for
/// pending or approved ones.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_status_differs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let steam_id = user.steam_id.parse::<u64>().unwrap();
    factory::application::create_application_with_status(db, steam_id, "whitelist", "AFVIST")
        .await?;

    let result = ApplicationRepository::new(db)
        .has_with_status(
            steam_id,
            Category::Whitelist,
            &[ApplicationStatus::Afventer, ApplicationStatus::Godkendt],
        )
        .await?;

    assert!(!result);

    Ok(())
}

/// Tests that the probe accepts any of the given statuses.
///
/// Verifies that an approved application satisfies a probe listing both
/// pending and approved, which is how the police and EMS blocking rule is
/// expressed.
///
/// Expected: Ok(true)
#[tokio::test]
async fn matches_any_of_given_statuses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let steam_id = user.steam_id.parse::<u64>().unwrap();
    factory::application::create_application_with_status(db, steam_id, "police", "GODKENDT")
        .await?;

    let result = ApplicationRepository::new(db)
        .has_with_status(
            steam_id,
            Category::Police,
            &[ApplicationStatus::Afventer, ApplicationStatus::Godkendt],
        )
        .await?;

    assert!(result);

    Ok(())
}

/// Tests that the probe is scoped to the category.
///
/// Verifies that an approved whitelist application does not satisfy a
/// police probe.
///
/// Expected: Ok(false)
#[tokio::test]
async fn is_scoped_to_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let steam_id = user.steam_id.parse::<u64>().unwrap();
    factory::application::create_application_with_status(db, steam_id, "whitelist", "GODKENDT")
        .await?;

    let result = ApplicationRepository::new(db)
        .has_with_status(steam_id, Category::Police, &[ApplicationStatus::Godkendt])
        .await?;

    assert!(!result);

    Ok(())
}
