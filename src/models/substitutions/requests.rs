use serde::Deserialize;
use ts_rs::TS;

use crate::models::lessons::entities::SubstitutionType;

// 追加代课请求
//
// 星期几由 date 推导，不由调用方提供。相同字段的二次追加会复用
// 已有的代课条目（幂等）；仅当日期不同才会产生新的课次记录。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/substitution.ts")]
pub struct AppendSubstitutionRequest {
    pub date: chrono::NaiveDate,
    pub hour_in_day: i32,
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub room_id: i64,
    // 缺省为 appended
    pub substitution_type: Option<SubstitutionType>,
    pub note: Option<String>,
}

// 在既有课次上标记代课类型（并课/取消），不创建新条目
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/substitution.ts")]
pub struct AssignSubstitutionRequest {
    pub lesson_id: i64,
    pub substitution_type: SubstitutionType,
    pub note: Option<String>,
}

// 撤销指定课位在指定日期的代课覆盖，回退到固定课表
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/substitution.ts")]
pub struct ResetSubstitutionRequest {
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub hour_in_day: i32,
    pub date: chrono::NaiveDate,
}
