use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TimetableService;
use crate::models::timetables::requests::{TimetableSetListQuery, TimetableSetQueryParams};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_sets(
    service: &TimetableService,
    request: &HttpRequest,
    query: TimetableSetQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = TimetableSetListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
    };

    match storage.list_timetable_sets_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Timetable sets retrieved successfully",
        ))),
        Err(e) => {
            error!("Failed to list timetable sets: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list timetable sets: {}", e.message()),
            )))
        }
    }
}
