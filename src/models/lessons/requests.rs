use serde::Deserialize;
use ts_rs::TS;

use super::entities::AttendanceState;

// 填写课次请求（授课后由教师提交）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct FinishLessonRequest {
    pub topic: String,
    pub note: Option<String>,
}

// 单个学生的考勤项
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct AttendanceItem {
    pub student_id: i64,
    pub state: AttendanceState,
}

// 提交考勤请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct RecordAttendanceRequest {
    pub attendances: Vec<AttendanceItem>,
}

// 物化班级日志请求：为区间内每个日期补齐固定课表对应的课次记录
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/lesson.ts")]
pub struct MaterializeLessonsRequest {
    pub from: chrono::NaiveDate,
    pub to: chrono::NaiveDate,
}
