use serde::Serialize;
use ts_rs::TS;

// 物化结果：新建的课次数量
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct MaterializeLessonsResponse {
    pub created: i64,
}
