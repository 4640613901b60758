use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学籍记录：学生在某班级（及可选分组）的成员区间
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/study.ts")]
pub struct Study {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    // 为空表示整班学籍
    pub subgroup_id: Option<i64>,
    pub valid_from: chrono::NaiveDate,
    pub valid_to: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
