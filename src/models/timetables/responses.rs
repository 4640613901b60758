use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::TimetableSet;
use crate::models::PaginationInfo;

// 课表版本列表响应
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub struct TimetableSetListResponse {
    pub items: Vec<TimetableSet>,
    pub pagination: PaginationInfo,
}
