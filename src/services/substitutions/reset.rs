use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubstitutionService;
use crate::errors::TimetableError;
use crate::models::substitutions::requests::ResetSubstitutionRequest;
use crate::models::substitutions::responses::ResetSubstitutionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_hour_in_day;

pub async fn reset(
    service: &SubstitutionService,
    request: &HttpRequest,
    data: ResetSubstitutionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 输入校验
    if let Err(msg) = validate_hour_in_day(data.hour_in_day) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    match storage.reset_substitution(data).await {
        Ok(restored_entry) => {
            info!(
                "Substitution reset, fallback entry: {:?}",
                restored_entry.as_ref().map(|e| e.id)
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ResetSubstitutionResponse { restored_entry },
                "Substitution reset successfully",
            )))
        }
        Err(e) => Ok(handle_reset_error(&e)),
    }
}

/// 错误响应辅助函数
fn handle_reset_error(e: &TimetableError) -> HttpResponse {
    error!("Substitution reset failed: {}", e);
    match e {
        TimetableError::NotFound(_) => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubstitutionNotFound,
            e.message(),
        )),
        _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("Substitution reset failed: {}", e.message()),
        )),
    }
}
