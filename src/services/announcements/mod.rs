pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::announcements::requests::AnnouncementRequest;
use crate::models::common::PaginationQuery;
use crate::storage::Storage;

pub struct AnnouncementService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnouncementService {
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

    // 公告列表，附带发布人、科目与年级
    pub async fn list_announcements(
        &self,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_announcements(self, query, request).await
    }

    pub async fn create_announcement(
        &self,
        announcement: AnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_announcement(self, announcement, request).await
    }

    pub async fn get_announcement(
        &self,
        ancmnt_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_announcement(self, ancmnt_id, request).await
    }

    pub async fn update_announcement(
        &self,
        ancmnt_id: i64,
        announcement: AnnouncementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_announcement(self, ancmnt_id, announcement, request).await
    }

    pub async fn delete_announcement(
        &self,
        ancmnt_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_announcement(self, ancmnt_id, request).await
    }
}
