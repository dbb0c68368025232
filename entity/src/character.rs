use sea_orm::entity::prelude::*;

/// A combatant row. `owner_id` is the owning user's Discord id; legacy
/// rows created before login support have no owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub armor_class: i32,
    pub max_hp: i32,
    pub current_hp: i32,
    pub initiative: i32,
    pub is_active: bool,
    pub owner_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::encounter::Entity> for Entity {
    fn to() -> RelationDef {
        super::encounter_character::Relation::Encounter.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::encounter_character::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
