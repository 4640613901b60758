//! 课表版本与条目的关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "timetable_set_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub set_id: i64,
    pub entry_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::timetable_sets::Entity",
        from = "Column::SetId",
        to = "super::timetable_sets::Column::Id"
    )]
    Set,
    #[sea_orm(
        belongs_to = "super::timetable_entries::Entity",
        from = "Column::EntryId",
        to = "super::timetable_entries::Column::Id"
    )]
    Entry,
}

impl Related<super::timetable_sets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Set.def()
    }
}

impl Related<super::timetable_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
