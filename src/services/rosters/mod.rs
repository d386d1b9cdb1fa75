pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::rosters::requests::{RosterListParams, RosterRequest};
use crate::storage::Storage;

/// 花名册没有更新操作，调整班级时先删后加
pub struct RosterService {
    storage: Option<Arc<dyn Storage>>,
}

impl RosterService {
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

    pub async fn list_rosters(
        &self,
        query: RosterListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_rosters(self, query, request).await
    }

    pub async fn create_roster(
        &self,
        roster: RosterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_roster(self, roster, request).await
    }

    pub async fn get_roster(&self, roster_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_roster(self, roster_id, request).await
    }

    pub async fn delete_roster(
        &self,
        roster_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_roster(self, roster_id, request).await
    }
}
