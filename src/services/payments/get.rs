use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PaymentService, with_proof_url};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{forbid_other_student, not_found, storage_failure};

pub async fn get_payment(
    service: &PaymentService,
    payment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    match storage.get_payment(payment_id).await {
        Ok(Some(payment)) => {
            if let Some(resp) = forbid_other_student(request, &payment.lrn) {
                return Ok(resp);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                with_proof_url(payment, &config.upload),
                "Payment retrieved successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::PaymentNotFound, "Payment not found")),
        Err(e) => Ok(storage_failure("Failed to get payment", e)),
    }
}
