use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课表版本（Timetable Set）
//
// 固定课表的一个命名版本，有效期 [valid_from, valid_to]（两端闭区间）。
// 任意两个版本的有效期不得重叠，保证任一日期的"当前课表"唯一。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableSet {
    pub id: i64,
    pub name: String,
    pub valid_from: chrono::NaiveDate,
    pub valid_to: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 固定课表条目（每周循环的课位）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableEntry {
    pub id: i64,
    // 星期几，0 = 周一 .. 6 = 周日
    pub day_in_week: i32,
    // 第几节课，0 ..= 10
    pub hour_in_day: i32,
    pub class_id: i64,
    // 为空表示整班课
    pub subgroup_id: Option<i64>,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub room_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 代课条目（单次生效的课位模板，不属于任何课表版本）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct SubstitutionEntry {
    pub id: i64,
    pub day_in_week: i32,
    pub hour_in_day: i32,
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub room_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
