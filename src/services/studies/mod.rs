pub mod create;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::studies::requests::CreateStudyRequest;
use crate::storage::Storage;

pub struct StudyService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudyService {
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

    // 创建学籍
    pub async fn create(
        &self,
        req: &HttpRequest,
        data: CreateStudyRequest,
    ) -> ActixResult<HttpResponse> {
        create::create(self, req, data).await
    }
}
