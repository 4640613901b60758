//! 考勤实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lesson_record_id: i64,
    pub student_id: i64,
    pub state: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson_records::Entity",
        from = "Column::LessonRecordId",
        to = "super::lesson_records::Column::Id"
    )]
    LessonRecord,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::lesson_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LessonRecord.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attendance(self) -> crate::models::lessons::entities::Attendance {
        use crate::models::lessons::entities::{Attendance, AttendanceState};

        Attendance {
            id: self.id,
            lesson_record_id: self.lesson_record_id,
            student_id: self.student_id,
            state: self
                .state
                .parse::<AttendanceState>()
                .unwrap_or(AttendanceState::Present),
        }
    }
}
