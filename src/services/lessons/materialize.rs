use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::LessonService;
use crate::models::lessons::requests::MaterializeLessonsRequest;
use crate::models::lessons::responses::MaterializeLessonsResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_date_interval;

pub async fn materialize(
    service: &LessonService,
    request: &HttpRequest,
    data: MaterializeLessonsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 输入校验
    if let Err(msg) = validate_date_interval(data.from, data.to) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
    }

    match storage.materialize_lessons(data).await {
        Ok(created) => {
            info!("Materialized {} lesson records", created);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MaterializeLessonsResponse { created },
                "Lesson records materialized successfully",
            )))
        }
        Err(e) => {
            error!("Lesson materialization failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Lesson materialization failed: {}", e.message()),
            )))
        }
    }
}
