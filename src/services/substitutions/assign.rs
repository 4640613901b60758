use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubstitutionService;
use crate::errors::TimetableError;
use crate::models::substitutions::requests::AssignSubstitutionRequest;
use crate::models::substitutions::responses::SubstitutionOccurrenceResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn assign(
    service: &SubstitutionService,
    request: &HttpRequest,
    data: AssignSubstitutionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // assign 只接受并课/取消；追加课必须通过 append 创建
    if !data.substitution_type.assignable() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Only 'merged' or 'dropped' can be assigned to an existing lesson",
        )));
    }

    match storage.assign_substitution(data).await {
        Ok(record) => {
            info!(
                "Substitution type {:?} assigned to lesson record {}",
                record.substitution_type, record.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubstitutionOccurrenceResponse {
                    lesson_id: record.id,
                },
                "Substitution assigned successfully",
            )))
        }
        Err(e) => Ok(handle_assign_error(&e)),
    }
}

/// 错误响应辅助函数
fn handle_assign_error(e: &TimetableError) -> HttpResponse {
    error!("Substitution assign failed: {}", e);
    match e {
        TimetableError::NotFound(_) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::LessonNotFound, e.message())),
        TimetableError::InvalidState(_) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::SubstitutionAssignFailed, e.message()),
        ),
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
            format!("Substitution assign failed: {}", e.message()),
        )),
    }
}
