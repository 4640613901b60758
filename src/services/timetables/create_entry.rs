use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TimetableService;
use crate::errors::TimetableError;
use crate::models::timetables::requests::CreateTimetableEntryRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_day_in_week, validate_hour_in_day};

pub async fn create_entry(
    service: &TimetableService,
    request: &HttpRequest,
    entry_data: CreateTimetableEntryRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 输入校验
    if let Err(msg) = validate_day_in_week(entry_data.day_in_week) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }
    if let Err(msg) = validate_hour_in_day(entry_data.hour_in_day) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    match storage.create_timetable_entry(entry_data).await {
        Ok(entry) => {
            info!(
                "Timetable entry {} created (day {}, hour {})",
                entry.id, entry.day_in_week, entry.hour_in_day
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(entry, "Timetable entry created successfully")))
        }
        Err(e) => Ok(handle_create_entry_error(&e)),
    }
}

/// 错误响应辅助函数：四类占用冲突分别映射业务码
fn handle_create_entry_error(e: &TimetableError) -> HttpResponse {
    error!("Timetable entry creation failed: {}", e);
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
    match e {
        TimetableError::NotFound(_) => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TimetableSetNotFound,
            e.message(),
        )),
        _ if e.message().contains("FOREIGN KEY constraint failed") => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::EntryCreationFailed,
                "Referenced class, subgroup, subject, teacher or room does not exist",
            ))
        }
        _ => HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::EntryCreationFailed,
            format!("Timetable entry creation failed: {}", e.message()),
        )),
    }
}
