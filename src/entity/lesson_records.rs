//! 班级日志记录实体
//!
//! 每行对应某日期的一个课次，来源为固定课表条目或代课条目，
//! 数据库层以两个可空外键存储；业务层通过 LessonSource 和类型分支。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: Date,
    pub timetable_entry_id: Option<i64>,
    pub substitution_entry_id: Option<i64>,
    pub substitution_type: Option<String>,
    pub topic: Option<String>,
    pub note: Option<String>,
    pub fill_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::timetable_entries::Entity",
        from = "Column::TimetableEntryId",
        to = "super::timetable_entries::Column::Id"
    )]
    TimetableEntry,
    #[sea_orm(
        belongs_to = "super::substitution_entries::Entity",
        from = "Column::SubstitutionEntryId",
        to = "super::substitution_entries::Column::Id"
    )]
    SubstitutionEntry,
    #[sea_orm(has_many = "super::attendances::Entity")]
    Attendances,
}

impl Related<super::timetable_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimetableEntry.def()
    }
}

impl Related<super::substitution_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubstitutionEntry.def()
    }
}

impl Related<super::attendances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_lesson_record(
        self,
    ) -> crate::errors::Result<crate::models::lessons::entities::LessonRecord> {
        use chrono::{DateTime, Utc};

        use crate::errors::TimetableError;
        use crate::models::lessons::entities::{LessonRecord, LessonSource};

        let source =
            LessonSource::from_columns(self.timetable_entry_id, self.substitution_entry_id)?;
        // 存储的类型值解析失败视为数据损坏，不得降级为"无类型"
        let substitution_type = match self.substitution_type.as_deref() {
            Some(raw) => Some(raw.parse().map_err(|_| {
                TimetableError::database_operation(format!(
                    "Lesson record {} carries an unknown substitution type '{raw}'",
                    self.id
                ))
            })?),
            None => None,
        };
        Ok(LessonRecord {
            id: self.id,
            date: self.date,
            source,
            substitution_type,
            topic: self.topic,
            note: self.note,
            fill_date: self
                .fill_date
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        })
    }
}
