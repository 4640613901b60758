//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::{attendances, lesson_records, studies, substitution_entries, timetable_entries};
use crate::errors::{Result, TimetableError};
use crate::models::lessons::{
    entities::{Attendance, LessonSource},
    requests::RecordAttendanceRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 提交课次考勤
    ///
    /// 校验每名学生在课次日期持有该班级的学籍后，整体替换该课次
    /// 的既有考勤行。已填写的课次不再接受考勤。
    pub async fn record_attendance_impl(
        &self,
        lesson_id: i64,
        req: RecordAttendanceRequest,
    ) -> Result<Vec<Attendance>> {
        let txn = self.db.begin().await?;

        let record = lesson_records::Entity::find_by_id(lesson_id)
            .one(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课次记录失败: {e}")))?
            .ok_or_else(|| {
                TimetableError::not_found(format!("Lesson record {lesson_id} does not exist"))
            })?;

        if record.fill_date.is_some() {
            return Err(TimetableError::already_filled(format!(
                "Lesson record {lesson_id} is already filled and can no longer change"
            )));
        }

        let source =
            LessonSource::from_columns(record.timetable_entry_id, record.substitution_entry_id)?;
        let class_id = self.lesson_class_id(&txn, source).await?;

        // 学籍校验：学生须在课次日期持有该班级的学籍
        for item in &req.attendances {
            let study = studies::Entity::find()
                .filter(studies::Column::StudentId.eq(item.student_id))
                .filter(studies::Column::ClassId.eq(class_id))
                .filter(studies::Column::ValidFrom.lte(record.date))
                .filter(studies::Column::ValidTo.gte(record.date))
                .one(&txn)
                .await
                .map_err(|e| TimetableError::database_operation(format!("查询学籍失败: {e}")))?;
            if study.is_none() {
                return Err(TimetableError::not_enrolled(format!(
                    "Student {} is not enrolled in class {} on {}",
                    item.student_id, class_id, record.date
                )));
            }
        }

        // 整体替换该课次的既有考勤
        attendances::Entity::delete_many()
            .filter(attendances::Column::LessonRecordId.eq(lesson_id))
            .exec(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("删除考勤失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        let mut saved = Vec::with_capacity(req.attendances.len());
        for item in req.attendances {
            let model = attendances::ActiveModel {
                lesson_record_id: Set(lesson_id),
                student_id: Set(item.student_id),
                state: Set(item.state.to_string()),
                created_at: Set(now),
                ..Default::default()
            };
            let inserted = model
                .insert(&txn)
                .await
                .map_err(|e| TimetableError::database_operation(format!("写入考勤失败: {e}")))?;
            saved.push(inserted.into_attendance());
        }

        txn.commit().await?;

        Ok(saved)
    }

    /// 课次归属的班级
    async fn lesson_class_id<C: ConnectionTrait>(
        &self,
        conn: &C,
        source: LessonSource,
    ) -> Result<i64> {
        match source {
            LessonSource::Permanent(entry_id) => {
                let entry = timetable_entries::Entity::find_by_id(entry_id)
                    .one(conn)
                    .await
                    .map_err(|e| {
                        TimetableError::database_operation(format!("查询课表条目失败: {e}"))
                    })?
                    .ok_or_else(|| {
                        TimetableError::not_found(format!(
                            "Timetable entry {entry_id} does not exist"
                        ))
                    })?;
                Ok(entry.class_id)
            }
            LessonSource::Substitution(entry_id) => {
                let entry = substitution_entries::Entity::find_by_id(entry_id)
                    .one(conn)
                    .await
                    .map_err(|e| {
                        TimetableError::database_operation(format!("查询代课条目失败: {e}"))
                    })?
                    .ok_or_else(|| {
                        TimetableError::not_found(format!(
                            "Substitution entry {entry_id} does not exist"
                        ))
                    })?;
                Ok(entry.class_id)
            }
        }
    }
}
