//! 网格变换与脱敏
//!
//! 把解析完成的平铺课次折叠为稀疏的 日 × 节 网格，并按请求视角
//! 隐藏对应维度。取消课无论视角一律退化为最小字段集，避免把
//! 已失效的教师/学科/教室信息泄露给前端。

use crate::models::grid::entities::{
    LessonSlot, ResolvedLesson, SlotCell, TimetableGrid, ViewMode,
};
use crate::models::lessons::entities::SubstitutionType;

/// 按视角脱敏单个课次
///
/// 取消课优先：只保留 lesson_id / class / subgroup / substitution_type。
pub fn mask_lesson(lesson: ResolvedLesson, view: ViewMode) -> LessonSlot {
    if lesson.substitution_type == Some(SubstitutionType::Dropped) {
        return LessonSlot {
            lesson_id: lesson.lesson_id,
            class: Some(lesson.class),
            subgroup: lesson.subgroup,
            subject: None,
            teacher: None,
            room: None,
            substitution_type: lesson.substitution_type,
        };
    }

    let mut slot = LessonSlot {
        lesson_id: lesson.lesson_id,
        class: Some(lesson.class),
        subgroup: lesson.subgroup,
        subject: Some(lesson.subject),
        teacher: Some(lesson.teacher),
        room: Some(lesson.room),
        substitution_type: lesson.substitution_type,
    };
    match view {
        ViewMode::Class => slot.class = None,
        ViewMode::Teacher => slot.teacher = None,
        ViewMode::Room => slot.room = None,
    }
    slot
}

/// 平铺课次 -> 稀疏网格
///
/// 空课位直接存放单课次；再次命中同一课位时折叠为数组追加，
/// 以容纳同班不同分组在同一课位的并行课。
pub fn build_grid(lessons: Vec<ResolvedLesson>, view: ViewMode) -> TimetableGrid {
    let mut grid = TimetableGrid::new();
    for lesson in lessons {
        let day = lesson.day_in_week;
        let hour = lesson.hour_in_day;
        let slot = mask_lesson(lesson, view);
        let hours = grid.entry(day).or_default();
        match hours.remove(&hour) {
            None => {
                hours.insert(hour, SlotCell::One(Box::new(slot)));
            }
            Some(SlotCell::One(existing)) => {
                hours.insert(hour, SlotCell::Many(vec![*existing, slot]));
            }
            Some(SlotCell::Many(mut list)) => {
                list.push(slot);
                hours.insert(hour, SlotCell::Many(list));
            }
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::entities::{
        ClassSummary, EmployeeSummary, RoomSummary, SubgroupSummary, SubjectSummary,
    };

    fn lesson(
        lesson_id: i64,
        day: i32,
        hour: i32,
        subgroup_id: Option<i64>,
        substitution_type: Option<SubstitutionType>,
    ) -> ResolvedLesson {
        ResolvedLesson {
            lesson_id,
            day_in_week: day,
            hour_in_day: hour,
            class: ClassSummary {
                id: 1,
                name: "1.A".to_string(),
            },
            subgroup: subgroup_id.map(|id| SubgroupSummary {
                id,
                name: format!("G{id}"),
            }),
            subject: SubjectSummary {
                id: 3,
                name: "Mathematics".to_string(),
                abbreviation: "M".to_string(),
            },
            teacher: EmployeeSummary {
                id: 7,
                name: "Novak".to_string(),
                abbreviation: "NV".to_string(),
            },
            room: RoomSummary {
                id: 2,
                name: "R2".to_string(),
            },
            substitution_type,
        }
    }

    #[test]
    fn test_class_view_hides_class() {
        let slot = mask_lesson(lesson(1, 0, 2, None, None), ViewMode::Class);
        assert!(slot.class.is_none());
        assert!(slot.teacher.is_some());
        assert!(slot.subject.is_some());
        assert!(slot.room.is_some());
    }

    #[test]
    fn test_teacher_view_hides_teacher() {
        let slot = mask_lesson(lesson(1, 0, 2, None, None), ViewMode::Teacher);
        assert!(slot.teacher.is_none());
        assert!(slot.class.is_some());
        assert!(slot.room.is_some());
    }

    #[test]
    fn test_room_view_hides_room() {
        let slot = mask_lesson(lesson(1, 0, 2, None, None), ViewMode::Room);
        assert!(slot.room.is_none());
        assert!(slot.class.is_some());
        assert!(slot.teacher.is_some());
    }

    #[test]
    fn test_dropped_mask_overrides_view() {
        // 取消课在任何视角下都不携带教师/学科/教室
        for view in [ViewMode::Class, ViewMode::Teacher, ViewMode::Room] {
            let slot = mask_lesson(
                lesson(1, 0, 2, Some(10), Some(SubstitutionType::Dropped)),
                view,
            );
            assert!(slot.teacher.is_none());
            assert!(slot.subject.is_none());
            assert!(slot.room.is_none());
            assert!(slot.class.is_some());
            assert!(slot.subgroup.is_some());
            assert_eq!(slot.substitution_type, Some(SubstitutionType::Dropped));
        }
    }

    #[test]
    fn test_dropped_slot_serializes_minimal_fields() {
        let slot = mask_lesson(
            lesson(1, 0, 2, None, Some(SubstitutionType::Dropped)),
            ViewMode::Class,
        );
        let json = serde_json::to_value(&slot).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("teacher"));
        assert!(!obj.contains_key("subject"));
        assert!(!obj.contains_key("room"));
        assert!(obj.contains_key("lesson_id"));
        assert!(obj.contains_key("class"));
        assert_eq!(obj["substitution_type"], "dropped");
    }

    #[test]
    fn test_grid_is_sparse() {
        let grid = build_grid(vec![lesson(1, 0, 2, None, None)], ViewMode::Class);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[&0].len(), 1);
        assert!(!grid.contains_key(&1));
        assert!(matches!(grid[&0][&2], SlotCell::One(_)));
    }

    #[test]
    fn test_two_lessons_same_slot_collapse_to_list() {
        let grid = build_grid(
            vec![
                lesson(1, 0, 2, Some(10), None),
                lesson(2, 0, 2, Some(11), None),
            ],
            ViewMode::Class,
        );
        match &grid[&0][&2] {
            SlotCell::Many(list) => {
                assert_eq!(list.len(), 2);
                assert_eq!(list[0].lesson_id, 1);
                assert_eq!(list[1].lesson_id, 2);
            }
            other => panic!("expected Many, got {other:?}"),
        }
    }

    #[test]
    fn test_third_lesson_appends_to_list() {
        let grid = build_grid(
            vec![
                lesson(1, 0, 2, Some(10), None),
                lesson(2, 0, 2, Some(11), None),
                lesson(3, 0, 2, Some(12), None),
            ],
            ViewMode::Class,
        );
        match &grid[&0][&2] {
            SlotCell::Many(list) => assert_eq!(list.len(), 3),
            other => panic!("expected Many, got {other:?}"),
        }
    }

    #[test]
    fn test_distinct_slots_stay_separate() {
        let grid = build_grid(
            vec![lesson(1, 0, 2, None, None), lesson(2, 3, 5, None, None)],
            ViewMode::Teacher,
        );
        assert!(matches!(grid[&0][&2], SlotCell::One(_)));
        assert!(matches!(grid[&3][&5], SlotCell::One(_)));
    }

    #[test]
    fn test_single_slot_serializes_as_object_not_array() {
        let grid = build_grid(vec![lesson(1, 0, 2, None, None)], ViewMode::Class);
        let json = serde_json::to_value(&grid).unwrap();
        assert!(json["0"]["2"].is_object());

        let grid = build_grid(
            vec![
                lesson(1, 0, 2, Some(10), None),
                lesson(2, 0, 2, Some(11), None),
            ],
            ViewMode::Class,
        );
        let json = serde_json::to_value(&grid).unwrap();
        assert!(json["0"]["2"].is_array());
    }
}
