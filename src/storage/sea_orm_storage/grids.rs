//! 课表网格取数

use super::SeaOrmStorage;
use super::summaries::SlotRef;
use crate::entity::{lesson_records, substitution_entries, timetable_entries};
use crate::errors::{Result, TimetableError};
use crate::models::grid::entities::{ResolvedLesson, ViewMode};
use crate::scheduling::resolve::resolve_day;
use chrono::{Datelike, NaiveDate};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 稳定视图：当前生效课表版本的固定条目（无日期维度）
    ///
    /// 当前没有任何版本生效时返回空表。
    pub async fn stable_grid_impl(&self, view: ViewMode, id: i64) -> Result<Vec<ResolvedLesson>> {
        let today = chrono::Utc::now().date_naive();
        let Some(set) = self.set_valid_on(&self.db, today).await? else {
            return Ok(Vec::new());
        };
        let entry_ids = self.entry_ids_of_set(&self.db, set.id).await?;
        if entry_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut select = timetable_entries::Entity::find()
            .filter(timetable_entries::Column::Id.is_in(entry_ids));
        select = match view {
            ViewMode::Class => select.filter(timetable_entries::Column::ClassId.eq(id)),
            ViewMode::Teacher => select.filter(timetable_entries::Column::TeacherId.eq(id)),
            ViewMode::Room => select.filter(timetable_entries::Column::RoomId.eq(id)),
        };
        let entries = select
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课表条目失败: {e}")))?;

        let slots: Vec<SlotRef> = entries.iter().map(permanent_slot_ref).collect();
        let maps = self.load_summaries(&self.db, &slots).await?;
        slots.iter().map(|s| maps.resolve(s)).collect()
    }

    /// 日期视图：固定课表与当日代课合成后的课次
    ///
    /// 覆盖判定需要全量课次参与（他维度的代课也可能顶掉本维度的
    /// 固定课），因此先按整日合成再按视角过滤。
    pub async fn dated_grid_impl(
        &self,
        view: ViewMode,
        id: i64,
        date: NaiveDate,
    ) -> Result<Vec<ResolvedLesson>> {
        let day_in_week = date.weekday().num_days_from_monday() as i32;

        // 当日固定课表
        let permanents = match self.set_valid_on(&self.db, date).await? {
            Some(set) => {
                let entry_ids = self.entry_ids_of_set(&self.db, set.id).await?;
                if entry_ids.is_empty() {
                    Vec::new()
                } else {
                    timetable_entries::Entity::find()
                        .filter(timetable_entries::Column::Id.is_in(entry_ids))
                        .filter(timetable_entries::Column::DayInWeek.eq(day_in_week))
                        .all(&self.db)
                        .await
                        .map_err(|e| {
                            TimetableError::database_operation(format!("查询课表条目失败: {e}"))
                        })?
                }
            }
            None => Vec::new(),
        };

        // 当日课次记录（两类来源都取，固定课次提供记录 ID 与类型）
        let records = lesson_records::Entity::find()
            .filter(lesson_records::Column::Date.eq(date))
            .all(&self.db)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课次记录失败: {e}")))?;

        let permanent_records: HashMap<i64, &lesson_records::Model> = records
            .iter()
            .filter_map(|r| r.timetable_entry_id.map(|id| (id, r)))
            .collect();

        let substitution_entry_ids: Vec<i64> = records
            .iter()
            .filter_map(|r| r.substitution_entry_id)
            .collect();
        let sub_entries = if substitution_entry_ids.is_empty() {
            Vec::new()
        } else {
            substitution_entries::Entity::find()
                .filter(substitution_entries::Column::Id.is_in(substitution_entry_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    TimetableError::database_operation(format!("查询代课条目失败: {e}"))
                })?
        };
        let substitution_by_id: HashMap<i64, &substitution_entries::Model> =
            sub_entries.iter().map(|e| (e.id, e)).collect();

        // 平铺为课位引用
        let mut permanent_slots: Vec<SlotRef> = Vec::with_capacity(permanents.len());
        for entry in &permanents {
            let mut slot = permanent_slot_ref(entry);
            // 已物化的课次用记录 ID 标识
            if let Some(record) = permanent_records.get(&entry.id) {
                slot.lesson_id = record.id;
            }
            permanent_slots.push(slot);
        }

        let mut substitution_slots: Vec<SlotRef> = Vec::new();
        for record in &records {
            let Some(entry_id) = record.substitution_entry_id else {
                continue;
            };
            let entry = substitution_by_id.get(&entry_id).ok_or_else(|| {
                TimetableError::database_operation(format!(
                    "Referenced substitution entry {entry_id} does not exist"
                ))
            })?;
            // 解析失败视为数据损坏：取消课若丢失类型会以全量字段渲染
            let substitution_type = match record.substitution_type.as_deref() {
                Some(raw) => Some(raw.parse().map_err(|_| {
                    TimetableError::database_operation(format!(
                        "Lesson record {} carries an unknown substitution type '{raw}'",
                        record.id
                    ))
                })?),
                None => None,
            };
            substitution_slots.push(SlotRef {
                lesson_id: record.id,
                day_in_week: entry.day_in_week,
                hour_in_day: entry.hour_in_day,
                class_id: entry.class_id,
                subgroup_id: entry.subgroup_id,
                subject_id: entry.subject_id,
                teacher_id: entry.teacher_id,
                room_id: entry.room_id,
                substitution_type,
            });
        }

        let all_slots: Vec<SlotRef> = permanent_slots
            .iter()
            .chain(substitution_slots.iter())
            .copied()
            .collect();
        let maps = self.load_summaries(&self.db, &all_slots).await?;

        let permanents: Vec<ResolvedLesson> = permanent_slots
            .iter()
            .map(|s| maps.resolve(s))
            .collect::<Result<_>>()?;
        let substitutions: Vec<ResolvedLesson> = substitution_slots
            .iter()
            .map(|s| maps.resolve(s))
            .collect::<Result<_>>()?;

        // 整日合成后按视角过滤
        let resolved = resolve_day(permanents, substitutions);
        Ok(resolved
            .into_iter()
            .filter(|l| match view {
                ViewMode::Class => l.class.id == id,
                ViewMode::Teacher => l.teacher.id == id,
                ViewMode::Room => l.room.id == id,
            })
            .collect())
    }
}

fn permanent_slot_ref(entry: &timetable_entries::Model) -> SlotRef {
    SlotRef {
        lesson_id: entry.id,
        day_in_week: entry.day_in_week,
        hour_in_day: entry.hour_in_day,
        class_id: entry.class_id,
        subgroup_id: entry.subgroup_id,
        subject_id: entry.subject_id,
        teacher_id: entry.teacher_id,
        room_id: entry.room_id,
        substitution_type: None,
    }
}
