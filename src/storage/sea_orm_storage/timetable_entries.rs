//! 固定课表条目存储操作

use super::SeaOrmStorage;
use crate::entity::{timetable_entries, timetable_set_entries, timetable_sets};
use crate::errors::{Result, TimetableError};
use crate::models::timetables::{
    entities::TimetableEntry, requests::CreateTimetableEntryRequest,
};
use crate::scheduling::validators::{ConflictScope, SlotCandidate, SlotOccupant, validate_slot};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建固定课表条目并挂到指定课表版本
    ///
    /// 占用快照取自版本族（与目标版本有效期重叠的全部版本）中
    /// 同一课位的条目，事务内执行四项占用校验后写入。
    pub async fn create_timetable_entry_impl(
        &self,
        req: CreateTimetableEntryRequest,
    ) -> Result<TimetableEntry> {
        let txn = self.db.begin().await?;

        let set = timetable_sets::Entity::find_by_id(req.timetable_set_id)
            .one(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询课表版本失败: {e}")))?
            .ok_or_else(|| {
                TimetableError::not_found(format!(
                    "Timetable set {} does not exist",
                    req.timetable_set_id
                ))
            })?;

        // 占用校验（教师 -> 教室 -> 整班 -> 分组，短路）
        let occupants = self
            .slot_occupants_for_set_family(&txn, &set, req.day_in_week, req.hour_in_day)
            .await?;
        let candidate = SlotCandidate {
            class_id: req.class_id,
            subgroup_id: req.subgroup_id,
            teacher_id: req.teacher_id,
            room_id: req.room_id,
        };
        validate_slot(&candidate, &occupants, &ConflictScope::Set(set.name.clone()))?;

        let now = chrono::Utc::now().timestamp();
        let entry = timetable_entries::ActiveModel {
            day_in_week: Set(req.day_in_week),
            hour_in_day: Set(req.hour_in_day),
            class_id: Set(req.class_id),
            subgroup_id: Set(req.subgroup_id),
            subject_id: Set(req.subject_id),
            teacher_id: Set(req.teacher_id),
            room_id: Set(req.room_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let entry = entry
            .insert(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("创建课表条目失败: {e}")))?;

        let link = timetable_set_entries::ActiveModel {
            set_id: Set(set.id),
            entry_id: Set(entry.id),
            ..Default::default()
        };
        link.insert(&txn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("关联课表版本失败: {e}")))?;

        txn.commit().await?;

        Ok(entry.into_timetable_entry())
    }

    /// 取版本族内同一课位的占用快照
    async fn slot_occupants_for_set_family<C: ConnectionTrait>(
        &self,
        conn: &C,
        set: &timetable_sets::Model,
        day_in_week: i32,
        hour_in_day: i32,
    ) -> Result<Vec<SlotOccupant>> {
        // 版本族：有效期与目标版本重叠的全部版本（含自身）
        let family = timetable_sets::Entity::find()
            .filter(timetable_sets::Column::ValidFrom.lte(set.valid_to))
            .filter(timetable_sets::Column::ValidTo.gte(set.valid_from))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询版本族失败: {e}")))?;
        let family_ids: Vec<i64> = family.iter().map(|s| s.id).collect();

        let links = timetable_set_entries::Entity::find()
            .filter(timetable_set_entries::Column::SetId.is_in(family_ids))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询版本条目失败: {e}")))?;
        let entry_ids: Vec<i64> = links.iter().map(|l| l.entry_id).collect();
        if entry_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entries = timetable_entries::Entity::find()
            .filter(timetable_entries::Column::Id.is_in(entry_ids))
            .filter(timetable_entries::Column::DayInWeek.eq(day_in_week))
            .filter(timetable_entries::Column::HourInDay.eq(hour_in_day))
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
}
