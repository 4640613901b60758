pub mod common;
pub mod grid;
pub mod lessons;
pub mod studies;
pub mod substitutions;
pub mod timetables;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

// 应用启动时间（用于统计运行时长）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
