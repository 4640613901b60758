//! 占用校验器
//!
//! 写入固定课表条目或代课条目前，对同一课位（星期几 + 第几节）的
//! 既有占用做四项检查：教师、教室、整班、分组。校验器是纯谓词，
//! 输入为事务内一次性取出的占用快照；按固定顺序执行，首个失败即
//! 短路返回，不聚合多个错误。

use chrono::NaiveDate;

use crate::errors::{Result, TimetableError};

/// 冲突归属范围，用于错误信息：固定课表按版本，代课按日期
#[derive(Debug, Clone, PartialEq)]
pub enum ConflictScope {
    Set(String),
    Date(NaiveDate),
}

impl std::fmt::Display for ConflictScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictScope::Set(name) => write!(f, "timetable set '{name}'"),
            ConflictScope::Date(date) => write!(f, "date {date}"),
        }
    }
}

/// 课位上已提交的占用条目（快照的一行）
#[derive(Debug, Clone, PartialEq)]
pub struct SlotOccupant {
    pub entry_id: i64,
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub teacher_id: i64,
    pub room_id: i64,
}

/// 待写入的候选条目
#[derive(Debug, Clone, PartialEq)]
pub struct SlotCandidate {
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub teacher_id: i64,
    pub room_id: i64,
}

/// 教师占用：同一课位不得出现同一教师的另一条目
pub fn check_teacher(
    candidate: &SlotCandidate,
    occupants: &[SlotOccupant],
    scope: &ConflictScope,
) -> Result<()> {
    match occupants.iter().find(|o| o.teacher_id == candidate.teacher_id) {
        Some(hit) => Err(TimetableError::teacher_conflict(format!(
            "Teacher {} is already assigned to entry {} at the same day and hour in {scope}",
            candidate.teacher_id, hit.entry_id
        ))),
        None => Ok(()),
    }
}

/// 教室占用：同一课位不得出现同一教室的另一条目
pub fn check_room(
    candidate: &SlotCandidate,
    occupants: &[SlotOccupant],
    scope: &ConflictScope,
) -> Result<()> {
    match occupants.iter().find(|o| o.room_id == candidate.room_id) {
        Some(hit) => Err(TimetableError::room_conflict(format!(
            "Room {} is already occupied by entry {} at the same day and hour in {scope}",
            candidate.room_id, hit.entry_id
        ))),
        None => Ok(()),
    }
}

/// 整班占用
///
/// - 新整班条目与该班级在同课位的任何条目（整班或分组）互斥；
/// - 新分组条目仅与该班级在同课位的整班条目互斥，
///   分组对分组不在此处判定（见 check_subgroup）。
pub fn check_class(
    candidate: &SlotCandidate,
    occupants: &[SlotOccupant],
    scope: &ConflictScope,
) -> Result<()> {
    let hit = occupants.iter().find(|o| {
        o.class_id == candidate.class_id
            && (candidate.subgroup_id.is_none() || o.subgroup_id.is_none())
    });
    match hit {
        Some(hit) => Err(TimetableError::class_conflict(format!(
            "Class {} already has entry {} at the same day and hour in {scope}",
            candidate.class_id, hit.entry_id
        ))),
        None => Ok(()),
    }
}

/// 分组占用：同一分组不得在同课位出现两条条目
pub fn check_subgroup(
    candidate: &SlotCandidate,
    occupants: &[SlotOccupant],
    scope: &ConflictScope,
) -> Result<()> {
    let Some(subgroup_id) = candidate.subgroup_id else {
        return Ok(());
    };
    match occupants.iter().find(|o| o.subgroup_id == Some(subgroup_id)) {
        Some(hit) => Err(TimetableError::subgroup_conflict(format!(
            "Subgroup {subgroup_id} is already scheduled by entry {} at the same day and hour in {scope}",
            hit.entry_id
        ))),
        None => Ok(()),
    }
}

/// 按固定顺序执行全部校验：教师 -> 教室 -> 整班 -> 分组，短路
pub fn validate_slot(
    candidate: &SlotCandidate,
    occupants: &[SlotOccupant],
    scope: &ConflictScope,
) -> Result<()> {
    check_teacher(candidate, occupants, scope)?;
    check_room(candidate, occupants, scope)?;
    check_class(candidate, occupants, scope)?;
    check_subgroup(candidate, occupants, scope)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> ConflictScope {
        ConflictScope::Set("2024/25".to_string())
    }

    fn occupant(entry_id: i64, class_id: i64, subgroup_id: Option<i64>) -> SlotOccupant {
        SlotOccupant {
            entry_id,
            class_id,
            subgroup_id,
            teacher_id: 100 + entry_id,
            room_id: 200 + entry_id,
        }
    }

    fn candidate(class_id: i64, subgroup_id: Option<i64>) -> SlotCandidate {
        SlotCandidate {
            class_id,
            subgroup_id,
            teacher_id: 77,
            room_id: 88,
        }
    }

    #[test]
    fn test_empty_slot_passes() {
        assert!(validate_slot(&candidate(1, None), &[], &scope()).is_ok());
    }

    #[test]
    fn test_teacher_conflict() {
        let mut other = occupant(1, 2, None);
        other.teacher_id = 77;
        let err = validate_slot(&candidate(1, None), &[other], &scope()).unwrap_err();
        assert_eq!(err.code(), "E101");
        assert!(err.message().contains("Teacher 77"));
        assert!(err.message().contains("2024/25"));
    }

    #[test]
    fn test_room_conflict() {
        let mut other = occupant(1, 2, None);
        other.room_id = 88;
        let err = validate_slot(&candidate(1, None), &[other], &scope()).unwrap_err();
        assert_eq!(err.code(), "E102");
        assert!(err.message().contains("Room 88"));
    }

    #[test]
    fn test_whole_class_blocks_whole_class() {
        let err =
            validate_slot(&candidate(1, None), &[occupant(5, 1, None)], &scope()).unwrap_err();
        assert_eq!(err.code(), "E103");
    }

    #[test]
    fn test_whole_class_blocks_subgroup_occupant() {
        // 新整班条目与既有分组条目互斥
        let err =
            validate_slot(&candidate(1, None), &[occupant(5, 1, Some(10))], &scope()).unwrap_err();
        assert_eq!(err.code(), "E103");
    }

    #[test]
    fn test_subgroup_blocked_by_whole_class() {
        let err =
            validate_slot(&candidate(1, Some(10)), &[occupant(5, 1, None)], &scope()).unwrap_err();
        assert_eq!(err.code(), "E103");
    }

    #[test]
    fn test_distinct_subgroups_coexist() {
        // 不同分组可并行上课，教师/教室不同则全部通过
        assert!(
            validate_slot(&candidate(1, Some(10)), &[occupant(5, 1, Some(11))], &scope()).is_ok()
        );
    }

    #[test]
    fn test_same_subgroup_conflict() {
        let err = validate_slot(&candidate(1, Some(10)), &[occupant(5, 2, Some(10))], &scope())
            .unwrap_err();
        assert_eq!(err.code(), "E104");
    }

    #[test]
    fn test_short_circuit_order() {
        // 同时命中教师与教室冲突时，先报教师冲突
        let mut other = occupant(1, 1, None);
        other.teacher_id = 77;
        other.room_id = 88;
        let err = validate_slot(&candidate(1, None), &[other], &scope()).unwrap_err();
        assert_eq!(err.code(), "E101");
    }

    #[test]
    fn test_date_scope_in_message() {
        let date_scope = ConflictScope::Date("2024-10-01".parse().unwrap());
        let mut other = occupant(1, 2, None);
        other.teacher_id = 77;
        let err = check_teacher(&candidate(1, None), &[other], &date_scope).unwrap_err();
        assert!(err.message().contains("date 2024-10-01"));
    }

    #[test]
    fn test_other_class_no_conflict() {
        assert!(validate_slot(&candidate(1, None), &[occupant(5, 2, None)], &scope()).is_ok());
    }
}
