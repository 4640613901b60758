use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 创建课表版本请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct CreateTimetableSetRequest {
    pub name: String,
    pub valid_from: chrono::NaiveDate,
    pub valid_to: chrono::NaiveDate,
}

// 课表版本查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableSetQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 课表版本列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableSetListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

// 创建固定课表条目请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct CreateTimetableEntryRequest {
    pub timetable_set_id: i64,
    pub day_in_week: i32,
    pub hour_in_day: i32,
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub room_id: i64,
}

// 课表网格查询参数；不带日期时返回稳定视图（仅固定课表）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct GridQueryParams {
    pub date: Option<chrono::NaiveDate>,
}
