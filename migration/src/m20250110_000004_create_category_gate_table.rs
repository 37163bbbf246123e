use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryGate::Table)
                    .if_not_exists()
                    .col(string(CategoryGate::Category).primary_key())
                    .col(boolean(CategoryGate::IsOpen))
                    .col(
                        timestamp(CategoryGate::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CategoryGate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CategoryGate {
    Table,
    Category,
    IsOpen,
    UpdatedAt,
}
