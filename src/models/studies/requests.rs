use serde::Deserialize;
use ts_rs::TS;

// 创建学籍请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/study.ts")]
pub struct CreateStudyRequest {
    pub student_id: i64,
    pub class_id: i64,
    pub subgroup_id: Option<i64>,
    pub valid_from: chrono::NaiveDate,
    pub valid_to: chrono::NaiveDate,
}
