pub mod create;
pub mod get;
pub mod history;
pub mod latest;
pub mod list;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::{AppConfig, UploadConfig};
use crate::models::payments::entities::Payment;
use crate::models::payments::requests::PaymentListParams;
use crate::storage::Storage;

pub struct PaymentService {
    storage: Option<Arc<dyn Storage>>,
}

/// 填充凭证访问地址
pub(crate) fn with_proof_url(mut payment: Payment, upload: &UploadConfig) -> Payment {
    payment.proof_url = Some(upload.public_url(&payment.proof_payment));
    payment
}

impl PaymentService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 提交缴费（multipart）
    pub async fn create_payment(
        &self,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_payment(self, payload, request).await
    }

    pub async fn get_payment(
        &self,
        payment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_payment(self, payment_id, request).await
    }

    pub async fn list_payments(
        &self,
        query: PaymentListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_payments(self, query, request).await
    }

    // 最近一次缴费及审核状态
    pub async fn get_latest_payment(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        latest::get_latest_payment(self, lrn, request).await
    }

    // 缴费历史
    pub async fn get_payment_history(
        &self,
        lrn: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        history::get_payment_history(self, lrn, request).await
    }
}
