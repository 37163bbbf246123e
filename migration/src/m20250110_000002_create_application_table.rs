use sea_orm_migration::{prelude::*, schema::*};

use super::m20250110_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(string(Application::SteamId))
                    .col(string(Application::Category))
                    .col(string(Application::Name))
                    .col(integer(Application::Age))
                    .col(string(Application::Discord))
                    .col(string(Application::Status))
                    .col(
                        timestamp(Application::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_steam_id")
                            .from(Application::Table, Application::SteamId)
                            .to(User::Table, User::SteamId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    SteamId,
    Category,
    Name,
    Age,
    Discord,
    Status,
    CreatedAt,
}
