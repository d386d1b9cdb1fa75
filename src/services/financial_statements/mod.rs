mod crud;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::financial_statements::requests::{
    FinancialStatementListParams, FinancialStatementRequest,
};
use crate::storage::Storage;

/// 对账单文档登记，上传时间由服务端写入
pub struct FinancialStatementService {
    storage: Option<Arc<dyn Storage>>,
}

impl FinancialStatementService {
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

    pub async fn list_statements(
        &self,
        query: FinancialStatementListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::list(self, query, request).await
    }

    pub async fn create_statement(
        &self,
        statement: FinancialStatementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::create(self, statement, request).await
    }

    pub async fn get_statement(&self, soa_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::get(self, soa_id, request).await
    }

    pub async fn update_statement(
        &self,
        soa_id: i64,
        statement: FinancialStatementRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::update(self, soa_id, statement, request).await
    }

    pub async fn delete_statement(
        &self,
        soa_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::delete(self, soa_id, request).await
    }
}
