mod crud;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::SubjectRequest;
use crate::models::common::PaginationQuery;
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
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

    pub async fn list_subjects(
        &self,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::list(self, query, request).await
    }

    pub async fn create_subject(
        &self,
        subject: SubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::create(self, subject, request).await
    }

    pub async fn get_subject(&self, subject_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::get(self, subject_id, request).await
    }

    pub async fn update_subject(
        &self,
        subject_id: i64,
        subject: SubjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::update(self, subject_id, subject, request).await
    }

    pub async fn delete_subject(&self, subject_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::delete(self, subject_id, request).await
    }
}
