//! 教室实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub capacity: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::timetable_entries::Entity")]
    TimetableEntries,
}

impl Related<super::timetable_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimetableEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
