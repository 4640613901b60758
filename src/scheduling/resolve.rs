//! 双来源解析
//!
//! 给定日期的课表由两部分合成：当日生效课表版本中的固定条目，
//! 以及显式挂到当日课次记录上的代课条目。代课对其覆盖的课位
//! 具有唯一权威性：被覆盖的固定条目不出现在结果中。

use crate::models::grid::entities::ResolvedLesson;

/// 代课是否覆盖某固定条目
///
/// 覆盖键为 (班级, 节次)；整班代课覆盖该班该节的一切固定条目，
/// 分组代课覆盖同分组条目与整班条目，不同分组互不影响。
fn displaces(substitution: &ResolvedLesson, permanent: &ResolvedLesson) -> bool {
    if substitution.class.id != permanent.class.id
        || substitution.hour_in_day != permanent.hour_in_day
    {
        return false;
    }
    match (&substitution.subgroup, &permanent.subgroup) {
        (None, _) | (_, None) => true,
        (Some(a), Some(b)) => a.id == b.id,
    }
}

/// 合并固定课表与代课课次，代课优先
///
/// 输入均为同一天（同一星期几）的平铺课次；输出顺序为
/// 未被覆盖的固定条目在前、代课在后，网格变换不依赖顺序。
pub fn resolve_day(
    permanents: Vec<ResolvedLesson>,
    substitutions: Vec<ResolvedLesson>,
) -> Vec<ResolvedLesson> {
    let mut resolved: Vec<ResolvedLesson> = permanents
        .into_iter()
        .filter(|p| !substitutions.iter().any(|s| displaces(s, p)))
        .collect();
    resolved.extend(substitutions);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grid::entities::{
        ClassSummary, EmployeeSummary, RoomSummary, SubgroupSummary, SubjectSummary,
    };
    use crate::models::lessons::entities::SubstitutionType;

    fn lesson(
        lesson_id: i64,
        hour: i32,
        class_id: i64,
        subgroup_id: Option<i64>,
        substitution_type: Option<SubstitutionType>,
    ) -> ResolvedLesson {
        ResolvedLesson {
            lesson_id,
            day_in_week: 0,
            hour_in_day: hour,
            class: ClassSummary {
                id: class_id,
                name: format!("C{class_id}"),
            },
            subgroup: subgroup_id.map(|id| SubgroupSummary {
                id,
                name: format!("G{id}"),
            }),
            subject: SubjectSummary {
                id: 1,
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
    fn test_no_substitution_keeps_permanents() {
        let permanents = vec![lesson(1, 2, 1, None, None), lesson(2, 3, 1, None, None)];
        let resolved = resolve_day(permanents.clone(), vec![]);
        assert_eq!(resolved, permanents);
    }

    #[test]
    fn test_substitution_displaces_same_slot() {
        let permanents = vec![lesson(1, 2, 1, None, None)];
        let substitutions = vec![lesson(50, 2, 1, None, Some(SubstitutionType::Dropped))];
        let resolved = resolve_day(permanents, substitutions);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].lesson_id, 50);
        assert_eq!(
            resolved[0].substitution_type,
            Some(SubstitutionType::Dropped)
        );
    }

    #[test]
    fn test_substitution_other_hour_coexists() {
        let permanents = vec![lesson(1, 2, 1, None, None)];
        let substitutions = vec![lesson(50, 5, 1, None, Some(SubstitutionType::Appended))];
        let resolved = resolve_day(permanents, substitutions);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_substitution_other_class_coexists() {
        let permanents = vec![lesson(1, 2, 1, None, None)];
        let substitutions = vec![lesson(50, 2, 2, None, Some(SubstitutionType::Appended))];
        let resolved = resolve_day(permanents, substitutions);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_whole_class_substitution_displaces_subgroups() {
        let permanents = vec![
            lesson(1, 2, 1, Some(10), None),
            lesson(2, 2, 1, Some(11), None),
        ];
        let substitutions = vec![lesson(50, 2, 1, None, Some(SubstitutionType::Merged))];
        let resolved = resolve_day(permanents, substitutions);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].lesson_id, 50);
    }

    #[test]
    fn test_subgroup_substitution_keeps_other_subgroup() {
        let permanents = vec![
            lesson(1, 2, 1, Some(10), None),
            lesson(2, 2, 1, Some(11), None),
        ];
        let substitutions = vec![lesson(50, 2, 1, Some(10), Some(SubstitutionType::Appended))];
        let resolved = resolve_day(permanents, substitutions);
        let ids: Vec<i64> = resolved.iter().map(|l| l.lesson_id).collect();
        assert_eq!(ids, vec![2, 50]);
    }
}
