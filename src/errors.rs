//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_timetable_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TimetableError {
            $($variant(String),)*
        }

        impl TimetableError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TimetableError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TimetableError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TimetableError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TimetableError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TimetableError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_timetable_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
    TeacherConflict("E101", "Teacher Conflict"),
    RoomConflict("E102", "Room Conflict"),
    ClassConflict("E103", "Class Conflict"),
    SubgroupConflict("E104", "Subgroup Conflict"),
    SetOverlap("E105", "Timetable Set Overlap"),
    StudyOverlap("E106", "Study Interval Overlap"),
    NotEnrolled("E107", "Student Not Enrolled"),
    MissingSource("E201", "Missing Lesson Source"),
    AmbiguousSource("E202", "Ambiguous Lesson Source"),
    AlreadyFilled("E203", "Lesson Already Filled"),
    InvalidState("E204", "Invalid State Transition"),
}

impl TimetableError {
    /// 是否为排课冲突类错误（四个占用校验器 + 区间重叠）
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            TimetableError::TeacherConflict(_)
                | TimetableError::RoomConflict(_)
                | TimetableError::ClassConflict(_)
                | TimetableError::SubgroupConflict(_)
                | TimetableError::SetOverlap(_)
                | TimetableError::StudyOverlap(_)
        )
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TimetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TimetableError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for TimetableError {
    fn from(err: sea_orm::DbErr) -> Self {
        TimetableError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for TimetableError {
    fn from(err: std::io::Error) -> Self {
        TimetableError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TimetableError {
    fn from(err: serde_json::Error) -> Self {
        TimetableError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TimetableError {
    fn from(err: chrono::ParseError) -> Self {
        TimetableError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TimetableError::database_config("test").code(), "E001");
        assert_eq!(TimetableError::validation("test").code(), "E004");
        assert_eq!(TimetableError::teacher_conflict("test").code(), "E101");
        assert_eq!(TimetableError::already_filled("test").code(), "E203");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TimetableError::room_conflict("test").error_type(),
            "Room Conflict"
        );
        assert_eq!(
            TimetableError::ambiguous_source("test").error_type(),
            "Ambiguous Lesson Source"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TimetableError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_is_conflict() {
        assert!(TimetableError::teacher_conflict("x").is_conflict());
        assert!(TimetableError::set_overlap("x").is_conflict());
        assert!(!TimetableError::not_found("x").is_conflict());
        assert!(!TimetableError::already_filled("x").is_conflict());
    }

    #[test]
    fn test_format_simple() {
        let err = TimetableError::class_conflict("Class already occupied");
        let formatted = err.format_simple();
        assert!(formatted.contains("Class Conflict"));
        assert!(formatted.contains("Class already occupied"));
    }
}
