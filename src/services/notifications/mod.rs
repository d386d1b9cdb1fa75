pub mod feed;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::NotificationQuery;
use crate::storage::Storage;

pub use feed::merge_notifications;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
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

    // 学生通知流
    pub async fn get_feed(
        &self,
        query: NotificationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        feed::get_feed(self, query, request).await
    }
}
