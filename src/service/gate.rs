use sea_orm::DatabaseConnection;

use crate::{
    data::gate::CategoryGateRepository,
    error::AppError,
    model::{application::Category, gate::CategoryGate},
};

/// Opens and closes the per-category submission gates.
///
/// The gate is advisory: clients read it to decide whether to render a
/// form, but submission eligibility is judged independently.
pub struct GateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the gate record for every category.
    pub async fn list(&self) -> Result<Vec<CategoryGate>, AppError> {
        CategoryGateRepository::new(self.db).get_all().await
    }

    /// Opens or closes a category's gate.
    pub async fn toggle(&self, category: Category, is_open: bool) -> Result<CategoryGate, AppError> {
        let gate = CategoryGateRepository::new(self.db)
            .set_open(category, is_open)
            .await?;

        tracing::info!(
            "Category gate {} is now {}",
            category,
            if gate.is_open { "open" } else { "closed" }
        );

        Ok(gate)
    }
}
