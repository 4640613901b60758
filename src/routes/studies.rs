use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::studies::requests::CreateStudyRequest;
use crate::services::StudyService;

// 懒加载的全局 STUDY_SERVICE 实例
static STUDY_SERVICE: Lazy<StudyService> = Lazy::new(StudyService::new_lazy);

// HTTP处理程序
pub async fn create(
    req: HttpRequest,
    data: web::Json<CreateStudyRequest>,
) -> ActixResult<HttpResponse> {
    STUDY_SERVICE.create(&req, data.into_inner()).await
}

// 配置路由
pub fn configure_studies_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/studies").service(web::resource("").route(web::post().to(create))));
}
