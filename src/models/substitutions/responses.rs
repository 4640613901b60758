use serde::Serialize;
use ts_rs::TS;

use crate::models::timetables::entities::TimetableEntry;

// 代课写操作统一返回受影响的课次 ID
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/substitution.ts")]
pub struct SubstitutionOccurrenceResponse {
    pub lesson_id: i64,
}

// 撤销代课的返回：恢复生效的固定课表条目（该课位可能本无固定课）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/substitution.ts")]
pub struct ResetSubstitutionResponse {
    pub restored_entry: Option<TimetableEntry>,
}
