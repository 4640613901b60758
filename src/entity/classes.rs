//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub valid_from: Date,
    pub valid_to: Date,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_groups::Entity")]
    StudentGroups,
    #[sea_orm(has_many = "super::studies::Entity")]
    Studies,
    #[sea_orm(has_many = "super::timetable_entries::Entity")]
    TimetableEntries,
}

impl Related<super::student_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentGroups.def()
    }
}

impl Related<super::studies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Studies.def()
    }
}

impl Related<super::timetable_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimetableEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
