//! 课表版本实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "timetable_sets")]
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
    #[sea_orm(has_many = "super::timetable_set_entries::Entity")]
    TimetableSetEntries,
}

impl Related<super::timetable_set_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimetableSetEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_timetable_set(self) -> crate::models::timetables::entities::TimetableSet {
        use chrono::{DateTime, Utc};

        crate::models::timetables::entities::TimetableSet {
            id: self.id,
            name: self.name,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
