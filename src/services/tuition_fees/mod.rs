mod crud;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::tuition_fees::requests::TuitionFeeRequest;
use crate::models::common::PaginationQuery;
use crate::storage::Storage;

pub struct TuitionFeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl TuitionFeeService {
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

    pub async fn list_tuition_fees(
        &self,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::list(self, query, request).await
    }

    pub async fn create_tuition_fee(
        &self,
        tuition_fee: TuitionFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::create(self, tuition_fee, request).await
    }

    pub async fn get_tuition_fee(&self, fee_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::get(self, fee_id, request).await
    }

    pub async fn update_tuition_fee(
        &self,
        fee_id: i64,
        tuition_fee: TuitionFeeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::update(self, fee_id, tuition_fee, request).await
    }

    pub async fn delete_tuition_fee(&self, fee_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::delete(self, fee_id, request).await
    }
}
