use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LessonService;
use crate::errors::TimetableError;
use crate::models::lessons::requests::FinishLessonRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn finish(
    service: &LessonService,
    request: &HttpRequest,
    lesson_id: i64,
    data: FinishLessonRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 输入校验
    if data.topic.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Lesson topic must not be empty",
        )));
    }

    match storage.finish_lesson(lesson_id, data).await {
        Ok(record) => {
            info!("Lesson record {} filled on {}", record.id, record.date);
            Ok(HttpResponse::Ok().json(ApiResponse::success(record, "Lesson filled successfully")))
        }
        Err(e) => Ok(handle_finish_error(&e)),
    }
}

/// 错误响应辅助函数
fn handle_finish_error(e: &TimetableError) -> HttpResponse {
    error!("Lesson finish failed: {}", e);
    match e {
        TimetableError::NotFound(_) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::LessonNotFound, e.message())),
        TimetableError::AlreadyFilled(_) => HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::LessonAlreadyFilled, e.message()),
        ),
        TimetableError::MissingSource(_) | TimetableError::AmbiguousSource(_) => {
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::LessonSourceCorrupted,
                e.message(),
            ))
        }
        _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Lesson finish failed: {}", e.message()),
        )),
    }
}
