//! 网格摘要信息的批量取数

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::{classes, employees, rooms, student_groups, subjects};
use crate::errors::{Result, TimetableError};
use crate::models::grid::entities::{
    ClassSummary, EmployeeSummary, ResolvedLesson, RoomSummary, SubgroupSummary, SubjectSummary,
};
use crate::models::lessons::entities::SubstitutionType;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

/// 课位条目的引用维度（固定条目与代课条目共用）
#[derive(Debug, Clone, Copy)]
pub(super) struct SlotRef {
    pub lesson_id: i64,
    pub day_in_week: i32,
    pub hour_in_day: i32,
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub room_id: i64,
    pub substitution_type: Option<SubstitutionType>,
}

/// 按 ID 索引的摘要表
pub(super) struct SummaryMaps {
    classes: HashMap<i64, ClassSummary>,
    subgroups: HashMap<i64, SubgroupSummary>,
    subjects: HashMap<i64, SubjectSummary>,
    teachers: HashMap<i64, EmployeeSummary>,
    rooms: HashMap<i64, RoomSummary>,
}

impl SummaryMaps {
    /// 组装脱敏前的课次；引用缺失视为数据损坏
    pub(super) fn resolve(&self, slot: &SlotRef) -> Result<ResolvedLesson> {
        let class = self
            .classes
            .get(&slot.class_id)
            .cloned()
            .ok_or_else(|| missing("class", slot.class_id))?;
        let subgroup = match slot.subgroup_id {
            Some(id) => Some(
                self.subgroups
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| missing("subgroup", id))?,
            ),
            None => None,
        };
        let subject = self
            .subjects
            .get(&slot.subject_id)
            .cloned()
            .ok_or_else(|| missing("subject", slot.subject_id))?;
        let teacher = self
            .teachers
            .get(&slot.teacher_id)
            .cloned()
            .ok_or_else(|| missing("teacher", slot.teacher_id))?;
        let room = self
            .rooms
            .get(&slot.room_id)
            .cloned()
            .ok_or_else(|| missing("room", slot.room_id))?;

        Ok(ResolvedLesson {
            lesson_id: slot.lesson_id,
            day_in_week: slot.day_in_week,
            hour_in_day: slot.hour_in_day,
            class,
            subgroup,
            subject,
            teacher,
            room,
            substitution_type: slot.substitution_type,
        })
    }
}

fn missing(kind: &str, id: i64) -> TimetableError {
    TimetableError::database_operation(format!("Referenced {kind} {id} does not exist"))
}

impl SeaOrmStorage {
    /// 一次性取出一批课位引用的全部摘要信息
    pub(super) async fn load_summaries<C: ConnectionTrait>(
        &self,
        conn: &C,
        slots: &[SlotRef],
    ) -> Result<SummaryMaps> {
        let class_ids: Vec<i64> = slots.iter().map(|s| s.class_id).collect();
        let subgroup_ids: Vec<i64> = slots.iter().filter_map(|s| s.subgroup_id).collect();
        let subject_ids: Vec<i64> = slots.iter().map(|s| s.subject_id).collect();
        let teacher_ids: Vec<i64> = slots.iter().map(|s| s.teacher_id).collect();
        let room_ids: Vec<i64> = slots.iter().map(|s| s.room_id).collect();

        let classes = classes::Entity::find()
            .filter(classes::Column::Id.is_in(class_ids))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询班级失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, ClassSummary { id: m.id, name: m.name }))
            .collect();

        let subgroups = student_groups::Entity::find()
            .filter(student_groups::Column::Id.is_in(subgroup_ids))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询分组失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, SubgroupSummary { id: m.id, name: m.name }))
            .collect();

        let subjects = subjects::Entity::find()
            .filter(subjects::Column::Id.is_in(subject_ids))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询学科失败: {e}")))?
            .into_iter()
            .map(|m| {
                (
                    m.id,
                    SubjectSummary {
                        id: m.id,
                        name: m.name,
                        abbreviation: m.abbreviation,
                    },
                )
            })
            .collect();

        let teachers = employees::Entity::find()
            .filter(employees::Column::Id.is_in(teacher_ids))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教职工失败: {e}")))?
            .into_iter()
            .map(|m| {
                (
                    m.id,
                    EmployeeSummary {
                        id: m.id,
                        name: m.name,
                        abbreviation: m.abbreviation,
                    },
                )
            })
            .collect();

        let rooms = rooms::Entity::find()
            .filter(rooms::Column::Id.is_in(room_ids))
            .all(conn)
            .await
            .map_err(|e| TimetableError::database_operation(format!("查询教室失败: {e}")))?
            .into_iter()
            .map(|m| (m.id, RoomSummary { id: m.id, name: m.name }))
            .collect();

        Ok(SummaryMaps {
            classes,
            subgroups,
            subjects,
            teachers,
            rooms,
        })
    }
}
