use super::*;

/// Tests finding an application by id within its category.
///
/// Verifies that the repository returns the application together with its
/// narrative field rows.
///
/// Expected: Ok(Some(Application)) with fields attached
#[tokio::test]
async fn finds_application_in_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let application = factory::helpers::create_application_for_user(db, &user, "police").await?;
    factory::application_field::create_fields(
        db,
        application.id,
        &[
            ("police_motivation", "Serve the city"),
            ("good_police_qualities", "Patience"),
        ],
    )
    .await?;

    let result = ApplicationRepository::new(db)
        .find_by_id(Category::Police, application.id)
        .await;

    assert!(result.is_ok());
    let found = result.unwrap().expect("application should exist");
    assert_eq!(found.id, application.id);
    assert_eq!(found.category, Category::Police);
    assert_eq!(found.fields.len(), 2);
    assert_eq!(
        found.fields.get("police_motivation"),
        Some(&"Serve the city".to_string())
    );

    Ok(())
}

/// Tests that the lookup is scoped to the requested category.
///
/// Verifies that an id existing under a different category is treated as
/// absent, so category-qualified routes cannot reach across kinds.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_wrong_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let application = factory::helpers::create_application_for_user(db, &user, "whitelist").await?;

    let result = ApplicationRepository::new(db)
        .find_by_id(Category::Police, application.id)
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests looking up an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ApplicationRepository::new(db)
        .find_by_id(Category::Whitelist, 9999)
        .await?;

    assert!(result.is_none());

    Ok(())
}
