use sea_orm::entity::prelude::*;

/// A named combat session owning a set of characters through the
/// `encounter_character` junction.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "encounter")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub owner_id: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub encounter_type: String,
    pub campaign_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::encounter_character::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::encounter_character::Relation::Encounter.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
