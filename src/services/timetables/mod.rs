pub mod create_entry;
pub mod create_set;
pub mod grid;
pub mod list_sets;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grid::entities::ViewMode;
use crate::models::timetables::requests::{
    CreateTimetableEntryRequest, CreateTimetableSetRequest, GridQueryParams,
    TimetableSetQueryParams,
};
use crate::storage::Storage;

pub struct TimetableService {
    storage: Option<Arc<dyn Storage>>,
}

impl TimetableService {
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

    // 创建课表版本
    pub async fn create_set(
        &self,
        req: &HttpRequest,
        set_data: CreateTimetableSetRequest,
    ) -> ActixResult<HttpResponse> {
        create_set::create_set(self, req, set_data).await
    }

    // 获取课表版本列表
    pub async fn list_sets(
        &self,
        req: &HttpRequest,
        query: TimetableSetQueryParams,
    ) -> ActixResult<HttpResponse> {
        list_sets::list_sets(self, req, query).await
    }

    // 创建固定课表条目
    pub async fn create_entry(
        &self,
        req: &HttpRequest,
        entry_data: CreateTimetableEntryRequest,
    ) -> ActixResult<HttpResponse> {
        create_entry::create_entry(self, req, entry_data).await
    }

    // 查询课表网格（班级/教师/教室视角）
    pub async fn grid(
        &self,
        req: &HttpRequest,
        view: ViewMode,
        id: i64,
        query: GridQueryParams,
    ) -> ActixResult<HttpResponse> {
        grid::grid(self, req, view, id, query).await
    }
}
