use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::lessons::entities::SubstitutionType;

// 网格视角：决定输出时隐藏哪个维度
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grid.ts")]
pub enum ViewMode {
    Class,   // 班级课表：隐藏班级字段
    Teacher, // 教师课表：隐藏教师字段
    Room,    // 教室课表：隐藏教室字段
}

impl<'de> Deserialize<'de> for ViewMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的课表视角: '{s}'. 支持的视角: class, teacher, room"
            ))
        })
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Class => write!(f, "class"),
            ViewMode::Teacher => write!(f, "teacher"),
            ViewMode::Room => write!(f, "room"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(ViewMode::Class),
            "teacher" => Ok(ViewMode::Teacher),
            "room" => Ok(ViewMode::Room),
            _ => Err(format!("Invalid view mode: {s}")),
        }
    }
}

// 网格单元中的摘要信息（仅携带前端展示所需字段）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grid.ts")]
pub struct EmployeeSummary {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grid.ts")]
pub struct SubjectSummary {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grid.ts")]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grid.ts")]
pub struct SubgroupSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grid.ts")]
pub struct RoomSummary {
    pub id: i64,
    pub name: String,
}

// 解析完成、尚未脱敏的课次（网格变换的输入）
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLesson {
    pub lesson_id: i64,
    pub day_in_week: i32,
    pub hour_in_day: i32,
    pub class: ClassSummary,
    pub subgroup: Option<SubgroupSummary>,
    pub subject: SubjectSummary,
    pub teacher: EmployeeSummary,
    pub room: RoomSummary,
    pub substitution_type: Option<SubstitutionType>,
}

// 脱敏后的网格单元课次
//
// 按视角隐藏的字段直接缺省；取消课统一只保留
// lesson_id / class / subgroup / substitution_type。
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grid.ts")]
pub struct LessonSlot {
    pub lesson_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroup: Option<SubgroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher: Option<EmployeeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution_type: Option<SubstitutionType>,
}

// 网格单元：单课次直接存放，同一课位多课次折叠为数组
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../frontend/src/types/generated/grid.ts")]
pub enum SlotCell {
    One(Box<LessonSlot>),
    Many(Vec<LessonSlot>),
}

// 稀疏的 日 × 节 网格；没有课的日/节不出现在键中
pub type TimetableGrid = BTreeMap<i32, BTreeMap<i32, SlotCell>>;

// 网格响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grid.ts")]
pub struct TimetableGridResponse {
    pub view: ViewMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<chrono::NaiveDate>,
    pub grid: TimetableGrid,
}
