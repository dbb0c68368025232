use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::Name))
                    .col(integer(Character::ArmorClass))
                    .col(integer(Character::MaxHp))
                    .col(integer(Character::CurrentHp))
                    .col(integer(Character::Initiative))
                    .col(boolean(Character::IsActive).default(false))
                    .col(string_null(Character::OwnerId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    ArmorClass,
    MaxHp,
    CurrentHp,
    Initiative,
    IsActive,
    OwnerId,
}
