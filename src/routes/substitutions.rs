use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::substitutions::requests::{
    AppendSubstitutionRequest, AssignSubstitutionRequest, ResetSubstitutionRequest,
};
use crate::services::SubstitutionService;

// 懒加载的全局 SUBSTITUTION_SERVICE 实例
static SUBSTITUTION_SERVICE: Lazy<SubstitutionService> = Lazy::new(SubstitutionService::new_lazy);

// HTTP处理程序
pub async fn append(
    req: HttpRequest,
    data: web::Json<AppendSubstitutionRequest>,
) -> ActixResult<HttpResponse> {
    SUBSTITUTION_SERVICE.append(&req, data.into_inner()).await
}

pub async fn assign(
    req: HttpRequest,
    data: web::Json<AssignSubstitutionRequest>,
) -> ActixResult<HttpResponse> {
    SUBSTITUTION_SERVICE.assign(&req, data.into_inner()).await
}

pub async fn reset(
    req: HttpRequest,
    query: web::Query<ResetSubstitutionRequest>,
) -> ActixResult<HttpResponse> {
    SUBSTITUTION_SERVICE.reset(&req, query.into_inner()).await
}

// 配置路由
pub fn configure_substitutions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/substitutions")
            .service(
                web::resource("")
                    .route(web::post().to(append))
                    // 撤销以查询串定位课位与日期
                    .route(web::delete().to(reset)),
            )
            .service(web::resource("/assign").route(web::put().to(assign))),
    );
}
