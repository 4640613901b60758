//! 班级日志（课次记录）存储操作

use super::SeaOrmStorage;
use crate::entity::{lesson_records, timetable_entries};
use crate::errors::{Result, TimetableError};
use crate::models::lessons::{
    entities::LessonRecord,
    requests::{FinishLessonRequest, MaterializeLessonsRequest},
};
use crate::scheduling::interval::DateInterval;
use chrono::Datelike;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 填写课次（授课主题与备注）
    ///
    /// 填写是单向状态迁移：fill_date 一经设置不可再改。
    pub async fn finish_lesson_impl(
        &self,
        lesson_id: i64,
        req: FinishLessonRequest,
    ) -> Result<LessonRecord> {
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

        let now = chrono::Utc::now().timestamp();
        let mut model: lesson_records::ActiveModel = record.into();
        model.topic = Set(Some(req.topic));
        if req.note.is_some() {
            model.note = Set(req.note);
        }
        model.fill_date = Set(Some(now));
        model.updated_at = Set(now);
        let updated = model
            .update(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("更新课次记录失败: {e}")))?;

        txn.commit().await?;

        updated.into_lesson_record()
    }

    /// 为日期区间物化缺失的课次记录
    ///
    /// 区间内每个日期，对当日生效版本在该星期几的每条固定条目，
    /// 补齐缺失的 (条目, 日期) 课次记录；既有记录保持不动（幂等）。
    pub async fn materialize_lessons_impl(&self, req: MaterializeLessonsRequest) -> Result<i64> {
        let txn = self.db.begin().await?;
        let now = chrono::Utc::now().timestamp();
        let mut created: i64 = 0;

        let range = DateInterval::new(req.from, req.to);
        let mut date = req.from;
        while range.contains_date(date) {
            let Some(set) = self.set_valid_on(&txn, date).await? else {
                date = date.succ_opt().ok_or_else(|| {
                    TimetableError::validation("Date range exceeds the calendar")
                })?;
                continue;
            };
            let entry_ids = self.entry_ids_of_set(&txn, set.id).await?;
            if entry_ids.is_empty() {
                date = date.succ_opt().ok_or_else(|| {
                    TimetableError::validation("Date range exceeds the calendar")
                })?;
                continue;
            }

            let day_in_week = date.weekday().num_days_from_monday() as i32;
            let entries = timetable_entries::Entity::find()
                .filter(timetable_entries::Column::Id.is_in(entry_ids.clone()))
                .filter(timetable_entries::Column::DayInWeek.eq(day_in_week))
                .all(&txn)
                .await
                .map_err(|e| {
                    TimetableError::database_operation(format!("查询课表条目失败: {e}"))
                })?;

            if !entries.is_empty() {
                let existing = lesson_records::Entity::find()
                    .filter(lesson_records::Column::Date.eq(date))
                    .filter(
                        lesson_records::Column::TimetableEntryId
                            .is_in(entries.iter().map(|e| e.id).collect::<Vec<_>>()),
                    )
                    .all(&txn)
                    .await
                    .map_err(|e| {
                        TimetableError::database_operation(format!("查询课次记录失败: {e}"))
                    })?;
                let existing_ids: Vec<i64> =
                    existing.iter().filter_map(|r| r.timetable_entry_id).collect();

                for entry in entries {
                    if existing_ids.contains(&entry.id) {
                        continue;
                    }
                    let record = lesson_records::ActiveModel {
                        date: Set(date),
                        timetable_entry_id: Set(Some(entry.id)),
                        substitution_entry_id: Set(None),
                        created_at: Set(now),
                        updated_at: Set(now),
                        ..Default::default()
                    };
                    record.insert(&txn).await.map_err(|e| {
                        TimetableError::database_operation(format!("创建课次记录失败: {e}"))
                    })?;
                    created += 1;
                }
            }

            date = date
                .succ_opt()
                .ok_or_else(|| TimetableError::validation("Date range exceeds the calendar"))?;
        }

        txn.commit().await?;

        Ok(created)
    }
}
