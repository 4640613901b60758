use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LessonService;
use crate::errors::TimetableError;
use crate::models::lessons::requests::RecordAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn attendance(
    service: &LessonService,
    request: &HttpRequest,
    lesson_id: i64,
    data: RecordAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.record_attendance(lesson_id, data).await {
        Ok(saved) => {
            info!(
                "Attendance recorded for lesson record {} ({} students)",
                lesson_id,
                saved.len()
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(saved, "Attendance recorded successfully")))
        }
        Err(e) => Ok(handle_attendance_error(&e)),
    }
}

/// 错误响应辅助函数
fn handle_attendance_error(e: &TimetableError) -> HttpResponse {
    error!("Attendance recording failed: {}", e);
    match e {
        TimetableError::NotFound(_) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::LessonNotFound, e.message())),
        TimetableError::AlreadyFilled(_) => HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::LessonAlreadyFilled, e.message()),
        ),
        TimetableError::NotEnrolled(_) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::StudentNotEnrolled, e.message()),
        ),
        TimetableError::MissingSource(_) | TimetableError::AmbiguousSource(_) => {
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::LessonSourceCorrupted,
                e.message(),
            ))
        }
        _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Attendance recording failed: {}", e.message()),
        )),
    }
}
