pub mod append;
pub mod assign;
pub mod reset;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::substitutions::requests::{
    AppendSubstitutionRequest, AssignSubstitutionRequest, ResetSubstitutionRequest,
};
use crate::storage::Storage;

pub struct SubstitutionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubstitutionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 追加代课
    pub async fn append(
        &self,
        req: &HttpRequest,
        data: AppendSubstitutionRequest,
    ) -> ActixResult<HttpResponse> {
        append::append(self, req, data).await
    }

    // 标记并课/取消
    pub async fn assign(
        &self,
        req: &HttpRequest,
        data: AssignSubstitutionRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign(self, req, data).await
    }

    // 撤销代课覆盖
    pub async fn reset(
        &self,
        req: &HttpRequest,
        data: ResetSubstitutionRequest,
    ) -> ActixResult<HttpResponse> {
        reset::reset(self, req, data).await
    }
}
