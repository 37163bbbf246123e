use super::*;

/// Tests closing an existing gate.
///
/// Verifies that the open flag is updated in place for a category that
/// already has a gate record.
///
/// Expected: Ok with is_open false persisted
#[tokio::test]
async fn closes_existing_gate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CategoryGate)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category_gate::create_gate(db, "whitelist", true).await?;

    let repo = CategoryGateRepository::new(db);
    let gate = repo.set_open(Category::Whitelist, false).await?;

    assert_eq!(gate.category, Category::Whitelist);
    assert!(!gate.is_open);

    let gates = repo.get_all().await?;
    assert_eq!(gates.len(), 1);
    assert!(!gates[0].is_open);

    Ok(())
}

/// Tests reopening a closed gate.
///
/// Expected: Ok with is_open true persisted
#[tokio::test]
async fn reopens_closed_gate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CategoryGate)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category_gate::create_gate(db, "ems", false).await?;

    let gate = CategoryGateRepository::new(db)
        .set_open(Category::Ems, true)
        .await?;

    assert!(gate.is_open);

    Ok(())
}

/// Tests toggling a gate that was never seeded.
///
/// Verifies that the record is created on demand rather than erroring, so
/// a toggle always lands.
///
/// Expected: Ok with new gate record created
#[tokio::test]
async fn creates_gate_when_absent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CategoryGate)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryGateRepository::new(db);
    let gate = repo.set_open(Category::Police, false).await?;

    assert_eq!(gate.category, Category::Police);
    assert!(!gate.is_open);
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
