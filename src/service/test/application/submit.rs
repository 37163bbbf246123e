use super::*;

use tokio::sync::mpsc;

use crate::service::{lifecycle::LifecycleService, notification::NotificationDispatcher};

fn whitelist_fields() -> HashMap<String, String> {
    Category::Whitelist
        .required_fields()
        .iter()
        .map(|key| (key.to_string(), format!("Svar til {}", key)))
        .collect()
}

/// Tests submitting a valid police application.
///
/// Verifies that the application is persisted in `AFVENTER` with the
/// applicant block and every narrative answer intact.
///
/// Expected: Ok(Application) that can be read back
#[tokio::test]
async fn creates_pending_police_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    let actor = whitelisted_actor(76561198000000001);

    let application = ApplicationService::new(db)
        .submit(&actor, Category::Police, police_payload())
        .await?;

    assert_eq!(application.steam_id, 76561198000000001);
    assert_eq!(application.category, Category::Police);
    assert_eq!(application.name, "Anna Jensen");
    assert_eq!(application.age, 24);
    assert_eq!(application.discord, "anna_j");
    assert_eq!(application.status, ApplicationStatus::Afventer);
    assert_eq!(application.fields.len(), 3);

    let stored = ApplicationRepository::new(db)
        .latest_for_user(76561198000000001, Category::Police)
        .await?
        .unwrap();
    assert_eq!(stored, application);

    Ok(())
}

/// Tests that police submissions require a whitelist approval.
///
/// Expected: Err(WhitelistRequired) and nothing persisted
#[tokio::test]
async fn rejects_unlisted_actor_for_police() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    let actor = unlisted_actor(76561198000000001);

    let result = ApplicationService::new(db)
        .submit(&actor, Category::Police, police_payload())
        .await;

    assert!(result.is_err());
    match result.unwrap_err() {
        AppError::ApplicationErr(ApplicationError::WhitelistRequired(category)) => {
            assert_eq!(category, Category::Police);
        }
        e => panic!("Expected WhitelistRequired error, got: {:?}", e),
    }

    let stored = ApplicationRepository::new(db)
        .latest_for_user(76561198000000001, Category::Police)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests that a pending application blocks a second submission.
///
/// Eligibility is checked before the payload, so the block fires even for
/// an empty form.
///
/// Expected: Err(AlreadyApplied)
#[tokio::test]
async fn rejects_duplicate_pending_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    factory::create_application_with_status(db, 76561198000000001, "whitelist", "AFVENTER")
        .await?;
    let actor = unlisted_actor(76561198000000001);

    let payload = CreateApplicationDto {
        name: "Anna Jensen".to_string(),
        age: 24,
        discord: "anna_j".to_string(),
        fields: HashMap::new(),
    };
    let result = ApplicationService::new(db)
        .submit(&actor, Category::Whitelist, payload)
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

/// Tests that a blank name or Discord username is rejected.
///
/// Expected: Err(BadRequest) for either blank field
#[tokio::test]
async fn rejects_blank_applicant_block() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    let actor = whitelisted_actor(76561198000000001);
    let service = ApplicationService::new(db);

    let mut payload = police_payload();
    payload.name = "   ".to_string();
    let result = service.submit(&actor, Category::Police, payload).await;
    match result.unwrap_err() {
        AppError::BadRequest(message) => {
            assert_eq!(message, "Name and Discord username are required");
        }
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    let mut payload = police_payload();
    payload.discord = String::new();
    let result = service.submit(&actor, Category::Police, payload).await;
    assert!(matches!(result.unwrap_err(), AppError::BadRequest(_)));

    Ok(())
}

/// Tests that a non-positive age is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_positive_age() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    let actor = whitelisted_actor(76561198000000001);

    let mut payload = police_payload();
    payload.age = 0;
    let result = ApplicationService::new(db)
        .submit(&actor, Category::Police, payload)
        .await;

    match result.unwrap_err() {
        AppError::BadRequest(message) => {
            assert_eq!(message, "Age must be a positive number");
        }
        e => panic!("Expected BadRequest error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that a field key outside the category schema is rejected.
///
/// Expected: Err(UnknownField) naming the stray key
#[tokio::test]
async fn rejects_unknown_field_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    let actor = whitelisted_actor(76561198000000001);

    let mut payload = police_payload();
    payload
        .fields
        .insert("favorite_color".to_string(), "Blaa".to_string());
    let result = ApplicationService::new(db)
        .submit(&actor, Category::Police, payload)
        .await;

    match result.unwrap_err() {
        AppError::ApplicationErr(ApplicationError::UnknownField { category, field }) => {
            assert_eq!(category, Category::Police);
            assert_eq!(field, "favorite_color");
        }
        e => panic!("Expected UnknownField error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that absent and blank required answers are reported together.
///
/// Expected: Err(MissingFields) listing both keys in schema order
#[tokio::test]
async fn reports_missing_required_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    let actor = whitelisted_actor(76561198000000001);

    let mut payload = police_payload();
    payload
        .fields
        .insert("police_motivation".to_string(), "  ".to_string());
    payload.fields.remove("good_police_qualities");
    let result = ApplicationService::new(db)
        .submit(&actor, Category::Police, payload)
        .await;

    match result.unwrap_err() {
        AppError::ApplicationErr(ApplicationError::MissingFields { category, fields }) => {
            assert_eq!(category, Category::Police);
            assert_eq!(
                fields,
                vec![
                    "police_motivation".to_string(),
                    "good_police_qualities".to_string()
                ]
            );
        }
        e => panic!("Expected MissingFields error, got: {:?}", e),
    }

    Ok(())
}

/// Tests that whitelist submissions need no prior approval and no
/// optional answers.
///
/// Expected: Ok(Application) in `AFVENTER`
#[tokio::test]
async fn accepts_whitelist_submission_without_optional_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    let actor = unlisted_actor(76561198000000001);

    let payload = CreateApplicationDto {
        name: "Mikkel Soerensen".to_string(),
        age: 19,
        discord: "mikkel_s".to_string(),
        fields: whitelist_fields(),
    };
    let application = ApplicationService::new(db)
        .submit(&actor, Category::Whitelist, payload)
        .await?;

    assert_eq!(application.category, Category::Whitelist);
    assert_eq!(application.status, ApplicationStatus::Afventer);
    assert_eq!(
        application.fields.len(),
        Category::Whitelist.required_fields().len()
    );

    Ok(())
}

/// Tests a whitelist application from submission through approval.
///
/// Verifies that a second submission is blocked while the first is under
/// review, and that the admin decision persists and queues exactly one
/// notification for the applicant.
///
/// Expected: duplicate blocked, then `GODKENDT` with a single queued job
#[tokio::test]
async fn walks_whitelist_application_through_approval() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;
    let actor = unlisted_actor(76561198000000001);
    let service = ApplicationService::new(db);

    let payload = CreateApplicationDto {
        name: "Anna".to_string(),
        age: 22,
        discord: "anna_rp".to_string(),
        fields: whitelist_fields(),
    };
    let application = service
        .submit(&actor, Category::Whitelist, payload.clone())
        .await?;
    assert_eq!(application.status, ApplicationStatus::Afventer);

    let second = service.submit(&actor, Category::Whitelist, payload).await;
    assert!(matches!(
        second.unwrap_err(),
        AppError::ApplicationErr(ApplicationError::AlreadyApplied(Category::Whitelist))
    ));

    let (tx, mut rx) = mpsc::channel(8);
    let dispatcher = NotificationDispatcher::for_sender(tx);
    let decided = LifecycleService::new(db, &dispatcher)
        .decide(
            Category::Whitelist,
            application.id,
            ApplicationStatus::Godkendt,
        )
        .await?;
    assert_eq!(decided.status, ApplicationStatus::Godkendt);

    let job = rx.try_recv().unwrap();
    assert_eq!(job.application_id, application.id);
    assert_eq!(job.category, Category::Whitelist);
    assert_eq!(job.status, ApplicationStatus::Godkendt);
    assert_eq!(job.discord_handle, "anna_rp");
    assert!(rx.try_recv().is_err());

    Ok(())
}
