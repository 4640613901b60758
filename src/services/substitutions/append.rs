use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubstitutionService;
use crate::errors::TimetableError;
use crate::models::substitutions::requests::AppendSubstitutionRequest;
use crate::models::substitutions::responses::SubstitutionOccurrenceResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_hour_in_day;

pub async fn append(
    service: &SubstitutionService,
    request: &HttpRequest,
    data: AppendSubstitutionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 输入校验（星期几由日期推导，不单独校验）
    if let Err(msg) = validate_hour_in_day(data.hour_in_day) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    match storage.append_substitution(data).await {
        Ok(record) => {
            info!(
                "Substitution appended: lesson record {} on {}",
                record.id, record.date
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SubstitutionOccurrenceResponse {
                    lesson_id: record.id,
                },
                "Substitution appended successfully",
            )))
        }
        Err(e) => Ok(handle_append_error(&e)),
    }
}

/// 错误响应辅助函数
fn handle_append_error(e: &TimetableError) -> HttpResponse {
    error!("Substitution append failed: {}", e);
    let conflict_code = match e {
        TimetableError::TeacherConflict(_) => Some(ErrorCode::TeacherConflict),
        TimetableError::RoomConflict(_) => Some(ErrorCode::RoomConflict),
        TimetableError::ClassConflict(_) => Some(ErrorCode::ClassConflict),
        TimetableError::SubgroupConflict(_) => Some(ErrorCode::SubgroupConflict),
        _ => None,
    };
    if let Some(code) = conflict_code {
        return HttpResponse::Conflict().json(ApiResponse::error_empty(code, e.message()));
    }
    if e.message().contains("FOREIGN KEY constraint failed") {
        return HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Referenced class, subgroup, subject, teacher or room does not exist",
        ));
    }
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Substitution append failed: {}", e.message()),
    ))
}
