use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PaymentService, with_proof_url};
use crate::models::ApiResponse;
use crate::models::payments::responses::PaymentHistoryResponse;
use crate::services::responses::{forbid_other_student, storage_failure};

pub async fn get_payment_history(
    service: &PaymentService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let config = service.get_config();

    match storage.list_student_payments(&lrn).await {
        Ok(payments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PaymentHistoryResponse {
                payments: payments
                    .into_iter()
                    .map(|p| with_proof_url(p, &config.upload))
                    .collect(),
            },
            "Payment history retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to load payment history", e)),
    }
}
