use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::timetables::requests::{
    CreateTimetableEntryRequest, CreateTimetableSetRequest, GridQueryParams,
    TimetableSetQueryParams,
};
use crate::services::TimetableService;
use crate::utils::{SafeGridTargetIdI64, SafeViewMode};

// 懒加载的全局 TIMETABLE_SERVICE 实例
static TIMETABLE_SERVICE: Lazy<TimetableService> = Lazy::new(TimetableService::new_lazy);

// HTTP处理程序
pub async fn create_set(
    req: HttpRequest,
    set_data: web::Json<CreateTimetableSetRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.create_set(&req, set_data.into_inner()).await
}

pub async fn list_sets(
    req: HttpRequest,
    query: web::Query<TimetableSetQueryParams>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE.list_sets(&req, query.into_inner()).await
}

pub async fn create_entry(
    req: HttpRequest,
    entry_data: web::Json<CreateTimetableEntryRequest>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .create_entry(&req, entry_data.into_inner())
        .await
}

pub async fn grid(
    req: HttpRequest,
    view: SafeViewMode,
    id: SafeGridTargetIdI64,
    query: web::Query<GridQueryParams>,
) -> ActixResult<HttpResponse> {
    TIMETABLE_SERVICE
        .grid(&req, view.0, id.0, query.into_inner())
        .await
}

// 配置路由
pub fn configure_timetables_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/timetables")
            .service(
                web::resource("/sets")
                    .route(web::get().to(list_sets))
                    .route(web::post().to(create_set)),
            )
            .service(web::resource("/entries").route(web::post().to(create_entry)))
            // 班级/教师/教室视角网格；带 ?date= 时合成当日代课
            .service(web::resource("/{view}/{id}").route(web::get().to(grid))),
    );
}
