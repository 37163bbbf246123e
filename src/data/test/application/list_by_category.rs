use super::*;

/// Tests that listing is scoped to one category.
///
/// Verifies that the review queue for a category never contains
/// applications from another category.
///
/// Expected: Ok with only the requested category's applications
#[tokio::test]
async fn returns_only_requested_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::helpers::create_application_for_user(db, &user, "whitelist").await?;
    let police = factory::helpers::create_application_for_user(db, &user, "police").await?;

    let applications = ApplicationRepository::new(db)
        .list_by_category(Category::Police)
        .await?;

    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].id, police.id);
    assert_eq!(applications[0].category, Category::Police);

    Ok(())
}

/// Tests that the review queue is ordered newest first.
///
/// Verifies that the most recently submitted application leads the list.
///
/// Expected: Ok with applications in descending submission order
#[tokio::test]
async fn orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let steam_id = user.steam_id.parse::<u64>().unwrap();

    let older = factory::application::ApplicationFactory::new(db, steam_id)
        .created_at(Utc::now() - Duration::minutes(10))
        .build()
        .await?;
    let newer = factory::application::ApplicationFactory::new(db, steam_id)
        .created_at(Utc::now())
        .build()
        .await?;

    let applications = ApplicationRepository::new(db)
        .list_by_category(Category::Whitelist)
        .await?;

    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].id, newer.id);
    assert_eq!(applications[1].id, older.id);

    Ok(())
}

/// Tests that each listed application carries its own field rows.
///
/// Verifies that the batch field load attributes answers to the right
/// application.
///
/// Expected: Ok with fields matched per application
#[tokio::test]
async fn attaches_fields_per_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let first = factory::helpers::create_application_for_user(db, &user, "ems").await?;
    let second = factory::helpers::create_application_for_user(db, &user, "ems").await?;
    factory::application_field::create_field(db, first.id, "ems_motivation", "Helping people")
        .await?;
    factory::application_field::create_field(db, second.id, "ems_motivation", "Medical RP").await?;

    let applications = ApplicationRepository::new(db)
        .list_by_category(Category::Ems)
        .await?;

    assert_eq!(applications.len(), 2);
    for application in applications {
        let expected = if application.id == first.id {
            "Helping people"
        } else {
            "Medical RP"
        };
        assert_eq!(
            application.fields.get("ems_motivation"),
            Some(&expected.to_string())
        );
    }

    Ok(())
}

/// Tests listing a category with no applications.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let applications = ApplicationRepository::new(db)
        .list_by_category(Category::Whitelist)
        .await?;

    assert!(applications.is_empty());

    Ok(())
}
