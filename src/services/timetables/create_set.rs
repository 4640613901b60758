use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TimetableService;
use crate::errors::TimetableError;
use crate::models::timetables::requests::CreateTimetableSetRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_date_interval;

pub async fn create_set(
    service: &TimetableService,
    request: &HttpRequest,
    set_data: CreateTimetableSetRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 输入校验
    if set_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Timetable set name must not be empty",
        )));
    }
    if let Err(msg) = validate_date_interval(set_data.valid_from, set_data.valid_to) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    match storage.create_timetable_set(set_data).await {
        Ok(set) => {
            info!("Timetable set '{}' created successfully", set.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(set, "Timetable set created successfully")))
        }
        Err(e) => Ok(handle_create_set_error(&e)),
    }
}

/// 错误响应辅助函数
fn handle_create_set_error(e: &TimetableError) -> HttpResponse {
    error!("Timetable set creation failed: {}", e);
    match e {
        TimetableError::SetOverlap(_) => HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::TimetableSetOverlap, e.message()),
        ),
        _ if e.message().contains("UNIQUE constraint failed") => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::TimetableSetCreationFailed,
                "Timetable set name already exists",
            ))
        }
        _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::TimetableSetCreationFailed,
            format!("Timetable set creation failed: {}", e.message()),
        )),
    }
}
