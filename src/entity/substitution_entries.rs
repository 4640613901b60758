//! 代课条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "substitution_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub day_in_week: i32,
    pub hour_in_day: i32,
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub room_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(has_many = "super::lesson_records::Entity")]
    LessonRecords,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::lesson_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_substitution_entry(
        self,
    ) -> crate::models::timetables::entities::SubstitutionEntry {
        use chrono::{DateTime, Utc};

        crate::models::timetables::entities::SubstitutionEntry {
            id: self.id,
            day_in_week: self.day_in_week,
            hour_in_day: self.hour_in_day,
            class_id: self.class_id,
            subgroup_id: self.subgroup_id,
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
            room_id: self.room_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
