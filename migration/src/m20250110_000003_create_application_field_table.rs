use sea_orm_migration::{prelude::*, schema::*};

use super::m20250110_000002_create_application_table::Application;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApplicationField::Table)
                    .if_not_exists()
                    .col(integer(ApplicationField::ApplicationId))
                    .col(string(ApplicationField::FieldKey))
                    .col(text(ApplicationField::Value))
                    .primary_key(
                        Index::create()
                            .col(ApplicationField::ApplicationId)
                            .col(ApplicationField::FieldKey),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_field_application_id")
                            .from(ApplicationField::Table, ApplicationField::ApplicationId)
                            .to(Application::Table, Application::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ApplicationField::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ApplicationField {
    Table,
    ApplicationId,
    FieldKey,
    Value,
}
