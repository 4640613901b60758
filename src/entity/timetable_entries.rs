//! 固定课表条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "timetable_entries")]
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
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::student_groups::Entity",
        from = "Column::SubgroupId",
        to = "super::student_groups::Column::Id"
    )]
    Subgroup,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::TeacherId",
        to = "super::employees::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id"
    )]
    Room,
    #[sea_orm(has_many = "super::timetable_set_entries::Entity")]
    TimetableSetEntries,
    #[sea_orm(has_many = "super::lesson_records::Entity")]
    LessonRecords,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::student_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subgroup.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::timetable_set_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimetableSetEntries.def()
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
    pub fn into_timetable_entry(self) -> crate::models::timetables::entities::TimetableEntry {
        use chrono::{DateTime, Utc};

        crate::models::timetables::entities::TimetableEntry {
            id: self.id,
            day_in_week: self.day_in_week,
            hour_in_day: self.hour_in_day,
            class_id: self.class_id,
            subgroup_id: self.subgroup_id,
            subject_id: self.subject_id,
            teacher_id: self.teacher_id,
            room_id: self.room_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
