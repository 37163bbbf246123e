use super::*;

/// Tests promoting a user to admin.
///
/// Verifies that the repository updates the stored role and that the new
/// role is visible on the next lookup.
///
/// Expected: Ok with role persisted as ADMIN
#[tokio::test]
async fn promotes_user_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_steam_id(db, 76561198000000001).await?;

    let repo = UserRepository::new(db);
    repo.set_role(76561198000000001, Role::Admin).await?;

    let user = repo
        .find_by_steam_id(76561198000000001)
        .await?
        .expect("user should exist");
    assert_eq!(user.role, Role::Admin);

    Ok(())
}

/// Tests demoting an admin back to a normal user.
///
/// Verifies that role changes work in both directions.
///
/// Expected: Ok with role persisted as NORMAL
#[tokio::test]
async fn demotes_admin_to_normal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .steam_id(76561198000000001)
        .role("ADMIN")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.set_role(76561198000000001, Role::Normal).await?;

    let user = repo
        .find_by_steam_id(76561198000000001)
        .await?
        .expect("user should exist");
    assert_eq!(user.role, Role::Normal);

    Ok(())
}

/// Tests setting a role for a steam id with no record.
///
/// Verifies that the update is a no-op rather than an error when the user
/// does not exist; the service layer is responsible for reporting missing
/// users.
///
/// Expected: Ok with no user created
#[tokio::test]
async fn is_noop_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.set_role(76561198000000001, Role::Admin).await?;

    assert!(repo.find_by_steam_id(76561198000000001).await?.is_none());

    Ok(())
}
