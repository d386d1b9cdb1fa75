mod crud;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sections::requests::SectionRequest;
use crate::models::common::PaginationQuery;
use crate::storage::Storage;

pub struct SectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SectionService {
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

    pub async fn list_sections(
        &self,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::list(self, query, request).await
    }

    pub async fn create_section(
        &self,
        section: SectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::create(self, section, request).await
    }

    pub async fn get_section(&self, section_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::get(self, section_id, request).await
    }

    pub async fn update_section(
        &self,
        section_id: i64,
        section: SectionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::update(self, section_id, section, request).await
    }

    pub async fn delete_section(&self, section_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::delete(self, section_id, request).await
    }
}
