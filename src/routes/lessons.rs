use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::lessons::requests::{
    FinishLessonRequest, MaterializeLessonsRequest, RecordAttendanceRequest,
};
use crate::services::LessonService;
use crate::utils::SafeLessonIdI64;

// 懒加载的全局 LESSON_SERVICE 实例
static LESSON_SERVICE: Lazy<LessonService> = Lazy::new(LessonService::new_lazy);

// HTTP处理程序
pub async fn finish(
    req: HttpRequest,
    lesson_id: SafeLessonIdI64,
    data: web::Json<FinishLessonRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .finish(&req, lesson_id.0, data.into_inner())
        .await
}

pub async fn attendance(
    req: HttpRequest,
    lesson_id: SafeLessonIdI64,
    data: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE
        .attendance(&req, lesson_id.0, data.into_inner())
        .await
}

pub async fn materialize(
    req: HttpRequest,
    data: web::Json<MaterializeLessonsRequest>,
) -> ActixResult<HttpResponse> {
    LESSON_SERVICE.materialize(&req, data.into_inner()).await
}

// 配置路由
pub fn configure_lessons_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lessons")
            .service(web::resource("/materialize").route(web::post().to(materialize)))
            .service(web::resource("/{lesson_id}/finish").route(web::put().to(finish)))
            .service(web::resource("/{lesson_id}/attendance").route(web::put().to(attendance))),
    );
}
