pub mod attendance;
pub mod finish;
pub mod materialize;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::lessons::requests::{
    FinishLessonRequest, MaterializeLessonsRequest, RecordAttendanceRequest,
};
use crate::storage::Storage;

pub struct LessonService {
    storage: Option<Arc<dyn Storage>>,
}

impl LessonService {
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

    // 填写课次
    pub async fn finish(
        &self,
        req: &HttpRequest,
        lesson_id: i64,
        data: FinishLessonRequest,
    ) -> ActixResult<HttpResponse> {
        finish::finish(self, req, lesson_id, data).await
    }

    // 提交考勤
    pub async fn attendance(
        &self,
        req: &HttpRequest,
        lesson_id: i64,
        data: RecordAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        attendance::attendance(self, req, lesson_id, data).await
    }

    // 物化班级日志
    pub async fn materialize(
        &self,
        req: &HttpRequest,
        data: MaterializeLessonsRequest,
    ) -> ActixResult<HttpResponse> {
        materialize::materialize(self, req, data).await
    }
}
