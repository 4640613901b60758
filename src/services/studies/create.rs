use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudyService;
use crate::errors::TimetableError;
use crate::models::studies::requests::CreateStudyRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_date_interval;

pub async fn create(
    service: &StudyService,
    request: &HttpRequest,
    data: CreateStudyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 输入校验
    if let Err(msg) = validate_date_interval(data.valid_from, data.valid_to) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    match storage.create_study(data).await {
        Ok(study) => {
            info!(
                "Study created: student {} in class {} ({} .. {})",
                study.student_id, study.class_id, study.valid_from, study.valid_to
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(study, "Study created successfully")))
        }
        Err(e) => Ok(handle_create_study_error(&e)),
    }
}

/// 错误响应辅助函数
fn handle_create_study_error(e: &TimetableError) -> HttpResponse {
    error!("Study creation failed: {}", e);
    match e {
        TimetableError::StudyOverlap(_) => HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::StudyOverlap, e.message())),
        TimetableError::NotFound(_) => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ResourceNotFound,
            e.message(),
        )),
        TimetableError::Validation(_) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::InvalidParameter, e.message()),
        ),
        _ if e.message().contains("FOREIGN KEY constraint failed") => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidParameter,
                "Referenced student, class or subgroup does not exist",
            ))
        }
        _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Study creation failed: {}", e.message()),
        )),
    }
}
