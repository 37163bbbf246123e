use super::*;

/// Tests deleting an application.
///
/// Verifies that the application row and its narrative field rows are both
/// removed from the store.
///
/// Expected: Ok with application and fields gone
#[tokio::test]
async fn deletes_application_and_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, application) = factory::helpers::create_user_with_application(db).await?;
    factory::application_field::create_fields(
        db,
        application.id,
        &[("rp_interest", "City life"), ("rp_duration", "Two years")],
    )
    .await?;

    let repo = ApplicationRepository::new(db);
    repo.delete(Category::Whitelist, application.id).await?;

    assert!(repo
        .find_by_id(Category::Whitelist, application.id)
        .await?
        .is_none());

    let remaining_fields = entity::prelude::ApplicationField::find()
        .filter(entity::application_field::Column::ApplicationId.eq(application.id))
        .count(db)
        .await
        .unwrap();
    assert_eq!(remaining_fields, 0);

    Ok(())
}

/// Tests that deletion is scoped to the category.
///
/// Verifies that an id under a different category is left untouched, so a
/// delete routed through the wrong category cannot destroy anything.
///
/// Expected: Ok with application still present
#[tokio::test]
async fn does_not_delete_across_categories() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let application = factory::helpers::create_application_for_user(db, &user, "whitelist").await?;

    let repo = ApplicationRepository::new(db);
    repo.delete(Category::Police, application.id).await?;

    assert!(repo
        .find_by_id(Category::Whitelist, application.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Verifies that the operation is idempotent and succeeds without error.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_portal_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ApplicationRepository::new(db)
        .delete(Category::Whitelist, 9999)
        .await;

    assert!(result.is_ok());

    Ok(())
}
