use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Encounter::Table)
                    .if_not_exists()
                    .col(pk_auto(Encounter::Id))
                    .col(string(Encounter::Name))
                    .col(string(Encounter::OwnerId))
                    .col(text(Encounter::Description))
                    .col(timestamp(Encounter::CreatedAt))
                    .col(timestamp(Encounter::UpdatedAt))
                    .col(string(Encounter::EncounterType))
                    .col(integer_null(Encounter::CampaignId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Encounter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Encounter {
    Table,
    Id,
    Name,
    OwnerId,
    Description,
    CreatedAt,
    UpdatedAt,
    EncounterType,
    CampaignId,
}
