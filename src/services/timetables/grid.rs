use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TimetableService;
use crate::models::grid::entities::{TimetableGridResponse, ViewMode};
use crate::models::timetables::requests::GridQueryParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::scheduling::grid::build_grid;

pub async fn grid(
    service: &TimetableService,
    request: &HttpRequest,
    view: ViewMode,
    id: i64,
    query: GridQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 带日期合成代课，不带日期仅固定课表
    let lessons = match query.date {
        Some(date) => storage.dated_grid(view, id, date).await,
        None => storage.stable_grid(view, id).await,
    };

    match lessons {
        Ok(lessons) => {
            let response = TimetableGridResponse {
                view,
                date: query.date,
                grid: build_grid(lessons, view),
            };
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(response, "Timetable grid retrieved successfully")))
        }
        Err(e) => {
            error!("Failed to build timetable grid: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to build timetable grid: {}", e.message()),
            )))
        }
    }
}
