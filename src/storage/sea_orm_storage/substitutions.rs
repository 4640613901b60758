//! 代课存储操作

use super::SeaOrmStorage;
use crate::entity::{lesson_records, substitution_entries, timetable_entries, timetable_sets};
use crate::errors::{Result, TimetableError};
use crate::models::{
    lessons::entities::{LessonRecord, SubstitutionType},
    substitutions::requests::{
        AppendSubstitutionRequest, AssignSubstitutionRequest, ResetSubstitutionRequest,
    },
    timetables::entities::TimetableEntry,
};
use crate::scheduling::validators::{ConflictScope, SlotCandidate, SlotOccupant, validate_slot};
use chrono::{Datelike, NaiveDate};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 追加代课
    ///
    /// 相同字段的代课条目被复用；同一（条目, 日期）已有课次记录时
    /// 直接返回该记录，整个操作幂等。新课次写入前对当日同课位的
    /// 其它代课做占用校验。
    pub async fn append_substitution_impl(
        &self,
        req: AppendSubstitutionRequest,
    ) -> Result<LessonRecord> {
        // 星期几由日期推导
        let day_in_week = req.date.weekday().num_days_from_monday() as i32;

        let txn = self.db.begin().await?;

        // 复用字段完全一致的既有代课条目
        let mut select = substitution_entries::Entity::find()
            .filter(substitution_entries::Column::DayInWeek.eq(day_in_week))
            .filter(substitution_entries::Column::HourInDay.eq(req.hour_in_day))
            .filter(substitution_entries::Column::ClassId.eq(req.class_id))
            .filter(substitution_entries::Column::SubjectId.eq(req.subject_id))
            .filter(substitution_entries::Column::TeacherId.eq(req.teacher_id))
            .filter(substitution_entries::Column::RoomId.eq(req.room_id));
        select = match req.subgroup_id {
            Some(subgroup_id) => {
                select.filter(substitution_entries::Column::SubgroupId.eq(subgroup_id))
            }
            None => select.filter(substitution_entries::Column::SubgroupId.is_null()),
        };
        let existing_entry = select
            .one(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询代课条目失败: {e}")))?;

        // 同一条目同一日期已有课次：幂等返回
        if let Some(ref entry) = existing_entry {
            let record = lesson_records::Entity::find()
                .filter(lesson_records::Column::SubstitutionEntryId.eq(entry.id))
                .filter(lesson_records::Column::Date.eq(req.date))
                .one(&txn)
                .await
                .map_err(|e| {
                    TimetableError::database_operation(format!("查询课次记录失败: {e}"))
                })?;
            if let Some(record) = record {
                txn.commit().await?;
                return record.into_lesson_record();
            }
        }

        // 占用校验：对当日同课位的其它代课
        let occupants = self
            .substitution_occupants_for_date(&txn, req.date, req.hour_in_day)
            .await?;
        let candidate = SlotCandidate {
            class_id: req.class_id,
            subgroup_id: req.subgroup_id,
            teacher_id: req.teacher_id,
            room_id: req.room_id,
        };
        validate_slot(&candidate, &occupants, &ConflictScope::Date(req.date))?;

        let now = chrono::Utc::now().timestamp();
        let entry = match existing_entry {
            Some(entry) => entry,
            None => {
                let model = substitution_entries::ActiveModel {
                    day_in_week: Set(day_in_week),
                    hour_in_day: Set(req.hour_in_day),
                    class_id: Set(req.class_id),
                    subgroup_id: Set(req.subgroup_id),
                    subject_id: Set(req.subject_id),
                    teacher_id: Set(req.teacher_id),
                    room_id: Set(req.room_id),
                    created_at: Set(now),
                    ..Default::default()
                };
                model.insert(&txn).await.map_err(|e| {
                    TimetableError::database_operation(format!("创建代课条目失败: {e}"))
                })?
            }
        };

        let substitution_type = req.substitution_type.unwrap_or(SubstitutionType::Appended);
        let record = lesson_records::ActiveModel {
            date: Set(req.date),
            timetable_entry_id: Set(None),
            substitution_entry_id: Set(Some(entry.id)),
            substitution_type: Set(Some(substitution_type.to_string())),
            note: Set(req.note),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let record = record
            .insert(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("创建课次记录失败: {e}")))?;

        txn.commit().await?;

        record.into_lesson_record()
    }

    /// 在既有课次上标记代课类型（并课/取消）
    ///
    /// 仅对来源为代课条目、尚未填写的课次有效。
    pub async fn assign_substitution_impl(
        &self,
        req: AssignSubstitutionRequest,
    ) -> Result<LessonRecord> {
        let txn = self.db.begin().await?;

        let record = lesson_records::Entity::find_by_id(req.lesson_id)
            .one(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课次记录失败: {e}")))?
            .ok_or_else(|| {
                TimetableError::not_found(format!("Lesson record {} does not exist", req.lesson_id))
            })?;

        let business = record.clone().into_lesson_record()?;
        if !business.source.is_substitution() {
            return Err(TimetableError::invalid_state(format!(
                "Lesson record {} is backed by a permanent entry; drop it via append instead",
                req.lesson_id
            )));
        }
        if business.is_filled() {
            return Err(TimetableError::already_filled(format!(
                "Lesson record {} is already filled and can no longer change",
                req.lesson_id
            )));
        }

        let mut model: lesson_records::ActiveModel = record.into();
        model.substitution_type = Set(Some(req.substitution_type.to_string()));
        if req.note.is_some() {
            model.note = Set(req.note);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());
        let updated = model
            .update(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("更新课次记录失败: {e}")))?;

        txn.commit().await?;

        updated.into_lesson_record()
    }

    /// 撤销课位在某日期的代课覆盖
    ///
    /// 删除覆盖该课位的代课课次，返回重新生效的固定课表条目；
    /// 该课位本无固定课时返回 None。无覆盖可撤销时报 NotFound。
    pub async fn reset_substitution_impl(
        &self,
        req: ResetSubstitutionRequest,
    ) -> Result<Option<TimetableEntry>> {
        let txn = self.db.begin().await?;

        // 当日来源为代课的全部课次
        let records = lesson_records::Entity::find()
            .filter(lesson_records::Column::Date.eq(req.date))
            .filter(lesson_records::Column::SubstitutionEntryId.is_not_null())
            .all(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课次记录失败: {e}")))?;
        let entry_ids: Vec<i64> = records
            .iter()
            .filter_map(|r| r.substitution_entry_id)
            .collect();

        let entries = if entry_ids.is_empty() {
            Vec::new()
        } else {
            substitution_entries::Entity::find()
                .filter(substitution_entries::Column::Id.is_in(entry_ids))
                .filter(substitution_entries::Column::ClassId.eq(req.class_id))
                .filter(substitution_entries::Column::HourInDay.eq(req.hour_in_day))
                .all(&txn)
                .await
                .map_err(|e| {
                    TimetableError::database_operation(format!("查询代课条目失败: {e}"))
                })?
        };

        // 覆盖判定：任一方为整班，或分组一致
        let covered: Vec<i64> = entries
            .iter()
            .filter(|e| match (req.subgroup_id, e.subgroup_id) {
                (None, _) | (_, None) => true,
                (Some(a), Some(b)) => a == b,
            })
            .map(|e| e.id)
            .collect();
        let record_ids: Vec<i64> = records
            .iter()
            .filter(|r| {
                r.substitution_entry_id
                    .map(|id| covered.contains(&id))
                    .unwrap_or(false)
            })
            .map(|r| r.id)
            .collect();

        if record_ids.is_empty() {
            return Err(TimetableError::not_found(format!(
                "No substitution covers class {} hour {} on {}",
                req.class_id, req.hour_in_day, req.date
            )));
        }

        lesson_records::Entity::delete_many()
            .filter(lesson_records::Column::Id.is_in(record_ids))
            .exec(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("删除课次记录失败: {e}")))?;

        // 恢复生效的固定条目（该课位可能本无固定课）
        let restored = self
            .permanent_entry_for_slot(&txn, req.date, req.class_id, req.subgroup_id, req.hour_in_day)
            .await?;

        txn.commit().await?;

        Ok(restored.map(|e| e.into_timetable_entry()))
    }

    /// 当日同课位其它代课的占用快照
    async fn substitution_occupants_for_date<C: ConnectionTrait>(
        &self,
        conn: &C,
        date: NaiveDate,
        hour_in_day: i32,
    ) -> Result<Vec<SlotOccupant>> {
        let records = lesson_records::Entity::find()
            .filter(lesson_records::Column::Date.eq(date))
            .filter(lesson_records::Column::SubstitutionEntryId.is_not_null())
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课次记录失败: {e}")))?;
        let entry_ids: Vec<i64> = records
            .iter()
            .filter_map(|r| r.substitution_entry_id)
            .collect();
        if entry_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entries = substitution_entries::Entity::find()
            .filter(substitution_entries::Column::Id.is_in(entry_ids))
            .filter(substitution_entries::Column::HourInDay.eq(hour_in_day))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课位占用失败: {e}")))?;

        Ok(entries
            .into_iter()
            .map(|e| SlotOccupant {
                entry_id: e.id,
                class_id: e.class_id,
                subgroup_id: e.subgroup_id,
                teacher_id: e.teacher_id,
                room_id: e.room_id,
            })
            .collect())
    }

    /// 某日期某课位重新生效的固定课表条目
    async fn permanent_entry_for_slot<C: ConnectionTrait>(
        &self,
        conn: &C,
        date: NaiveDate,
        class_id: i64,
        subgroup_id: Option<i64>,
        hour_in_day: i32,
    ) -> Result<Option<timetable_entries::Model>> {
        let Some(set) = self.set_valid_on(conn, date).await? else {
            return Ok(None);
        };
        let entry_ids = self.entry_ids_of_set(conn, set.id).await?;
        if entry_ids.is_empty() {
            return Ok(None);
        }

        let day_in_week = date.weekday().num_days_from_monday() as i32;
        let entries = timetable_entries::Entity::find()
            .filter(timetable_entries::Column::Id.is_in(entry_ids))
            .filter(timetable_entries::Column::DayInWeek.eq(day_in_week))
            .filter(timetable_entries::Column::HourInDay.eq(hour_in_day))
            .filter(timetable_entries::Column::ClassId.eq(class_id))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课表条目失败: {e}")))?;

        Ok(entries.into_iter().find(|e| {
            match (subgroup_id, e.subgroup_id) {
                (None, _) | (_, None) => true,
                (Some(a), Some(b)) => a == b,
            }
        }))
    }

    /// 某日期生效的课表版本
    pub(super) async fn set_valid_on<C: ConnectionTrait>(
        &self,
        conn: &C,
        date: NaiveDate,
    ) -> Result<Option<timetable_sets::Model>> {
        timetable_sets::Entity::find()
            .filter(timetable_sets::Column::ValidFrom.lte(date))
            .filter(timetable_sets::Column::ValidTo.gte(date))
            .one(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课表版本失败: {e}")))
    }

    /// 某课表版本挂载的条目 ID 列表
    pub(super) async fn entry_ids_of_set<C: ConnectionTrait>(
        &self,
        conn: &C,
        set_id: i64,
    ) -> Result<Vec<i64>> {
        use crate::entity::timetable_set_entries;

        let links = timetable_set_entries::Entity::find()
            .filter(timetable_set_entries::Column::SetId.eq(set_id))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询版本条目失败: {e}")))?;
        Ok(links.into_iter().map(|l| l.entry_id).collect())
    }
}
