use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000002_create_character_table::Character;
use crate::m20260801_000003_create_encounter_table::Encounter;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EncounterCharacter::Table)
                    .if_not_exists()
                    .col(integer(EncounterCharacter::EncounterId))
                    .col(integer(EncounterCharacter::CharacterId))
                    .primary_key(
                        Index::create()
                            .col(EncounterCharacter::EncounterId)
                            .col(EncounterCharacter::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_encounter_character_encounter")
                            .from(EncounterCharacter::Table, EncounterCharacter::EncounterId)
                            .to(Encounter::Table, Encounter::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_encounter_character_character")
                            .from(EncounterCharacter::Table, EncounterCharacter::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EncounterCharacter::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EncounterCharacter {
    Table,
    EncounterId,
    CharacterId,
}
