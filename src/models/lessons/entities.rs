use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, TimetableError};

// 代课类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub enum SubstitutionType {
    Appended, // 追加课
    Merged,   // 并课
    Dropped,  // 取消课
}

impl SubstitutionType {
    pub const APPENDED: &'static str = "appended";
    pub const MERGED: &'static str = "merged";
    pub const DROPPED: &'static str = "dropped";

    /// assign 操作允许的类型（追加课必须通过 append 创建）
    pub fn assignable(&self) -> bool {
        matches!(self, SubstitutionType::Merged | SubstitutionType::Dropped)
    }
}

impl<'de> Deserialize<'de> for SubstitutionType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubstitutionType::APPENDED => Ok(SubstitutionType::Appended),
            SubstitutionType::MERGED => Ok(SubstitutionType::Merged),
            SubstitutionType::DROPPED => Ok(SubstitutionType::Dropped),
            _ => Err(serde::de::Error::custom(format!(
                "无效的代课类型: '{s}'. 支持的类型: appended, merged, dropped"
            ))),
        }
    }
}

impl std::fmt::Display for SubstitutionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubstitutionType::Appended => write!(f, "{}", SubstitutionType::APPENDED),
            SubstitutionType::Merged => write!(f, "{}", SubstitutionType::MERGED),
            SubstitutionType::Dropped => write!(f, "{}", SubstitutionType::DROPPED),
        }
    }
}

impl std::str::FromStr for SubstitutionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "appended" => Ok(SubstitutionType::Appended),
            "merged" => Ok(SubstitutionType::Merged),
            "dropped" => Ok(SubstitutionType::Dropped),
            _ => Err(format!("Invalid substitution type: {s}")),
        }
    }
}

// 课次来源：固定课表条目或代课条目，二者必居其一
//
// 数据库中以两个可空外键存储；业务层一律通过该和类型分支，
// 不允许直接判断某列是否为 NULL。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub enum LessonSource {
    Permanent(i64),
    Substitution(i64),
}

impl LessonSource {
    /// 从两个可空外键列还原来源
    ///
    /// 两列均空 -> MissingSource；两列均非空 -> AmbiguousSource。
    pub fn from_columns(permanent: Option<i64>, substitution: Option<i64>) -> Result<Self> {
        match (permanent, substitution) {
            (Some(id), None) => Ok(LessonSource::Permanent(id)),
            (None, Some(id)) => Ok(LessonSource::Substitution(id)),
            (None, None) => Err(TimetableError::missing_source(
                "Lesson record references neither a permanent nor a substitution entry",
            )),
            (Some(p), Some(s)) => Err(TimetableError::ambiguous_source(format!(
                "Lesson record references both permanent entry {p} and substitution entry {s}"
            ))),
        }
    }

    /// 拆分为两个可空外键列（写库用）
    pub fn into_columns(self) -> (Option<i64>, Option<i64>) {
        match self {
            LessonSource::Permanent(id) => (Some(id), None),
            LessonSource::Substitution(id) => (None, Some(id)),
        }
    }

    pub fn is_substitution(&self) -> bool {
        matches!(self, LessonSource::Substitution(_))
    }
}

// 考勤状态，缺省视为出勤
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub enum AttendanceState {
    Present, // 出勤
    Late,    // 迟到
    Absent,  // 缺勤
    Excused, // 请假
}

impl<'de> Deserialize<'de> for AttendanceState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: present, late, absent, excused"
            ))
        })
    }
}

impl std::fmt::Display for AttendanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceState::Present => write!(f, "present"),
            AttendanceState::Late => write!(f, "late"),
            AttendanceState::Absent => write!(f, "absent"),
            AttendanceState::Excused => write!(f, "excused"),
        }
    }
}

impl std::str::FromStr for AttendanceState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceState::Present),
            "late" => Ok(AttendanceState::Late),
            "absent" => Ok(AttendanceState::Absent),
            "excused" => Ok(AttendanceState::Excused),
            _ => Err(format!("Invalid attendance state: {s}")),
        }
    }
}

// 班级日志记录（课次实体）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct LessonRecord {
    pub id: i64,
    pub date: chrono::NaiveDate,
    pub source: LessonSource,
    pub substitution_type: Option<SubstitutionType>,
    pub topic: Option<String>,
    pub note: Option<String>,
    // 为空表示该课次尚未授课/填写
    pub fill_date: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl LessonRecord {
    pub fn is_filled(&self) -> bool {
        self.fill_date.is_some()
    }
}

// 考勤实体
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct Attendance {
    pub id: i64,
    pub lesson_record_id: i64,
    pub student_id: i64,
    pub state: AttendanceState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_columns_permanent() {
        let source = LessonSource::from_columns(Some(7), None).unwrap();
        assert_eq!(source, LessonSource::Permanent(7));
        assert!(!source.is_substitution());
    }

    #[test]
    fn test_source_from_columns_substitution() {
        let source = LessonSource::from_columns(None, Some(3)).unwrap();
        assert_eq!(source, LessonSource::Substitution(3));
        assert!(source.is_substitution());
    }

    #[test]
    fn test_source_from_columns_missing() {
        let err = LessonSource::from_columns(None, None).unwrap_err();
        assert_eq!(err.code(), "E201");
    }

    #[test]
    fn test_source_from_columns_ambiguous() {
        let err = LessonSource::from_columns(Some(1), Some(2)).unwrap_err();
        assert_eq!(err.code(), "E202");
    }

    #[test]
    fn test_source_columns_roundtrip() {
        assert_eq!(
            LessonSource::Permanent(5).into_columns(),
            (Some(5), None)
        );
        assert_eq!(
            LessonSource::Substitution(9).into_columns(),
            (None, Some(9))
        );
    }

    #[test]
    fn test_substitution_type_parse() {
        assert_eq!(
            "dropped".parse::<SubstitutionType>().unwrap(),
            SubstitutionType::Dropped
        );
        assert!("cancelled".parse::<SubstitutionType>().is_err());
    }

    #[test]
    fn test_assignable_types() {
        assert!(SubstitutionType::Merged.assignable());
        assert!(SubstitutionType::Dropped.assignable());
        assert!(!SubstitutionType::Appended.assignable());
    }
}
