use sea_orm::entity::prelude::*;

/// Junction table for the encounter/character many-to-many membership.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "encounter_character")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub encounter_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub character_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::encounter::Entity",
        from = "Column::EncounterId",
        to = "super::encounter::Column::Id"
    )]
    Encounter,
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id"
    )]
    Character,
}

impl ActiveModelBehavior for ActiveModel {}
