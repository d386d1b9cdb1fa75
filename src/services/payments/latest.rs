use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::models::payments::responses::LatestPaymentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{forbid_other_student, not_found, storage_failure};

/// 最近一次缴费，附带最近入学记录的审核状态
pub async fn get_latest_payment(
    service: &PaymentService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);
    let config = service.get_config();

    let payment = match storage.list_student_payments(&lrn).await {
        Ok(payments) => match payments.into_iter().next() {
            Some(p) => p,
            None => return Ok(not_found(ErrorCode::PaymentNotFound, "Payment not found")),
        },
        Err(e) => return Ok(storage_failure("Failed to load payments", e)),
    };

    let enrollment = match storage.get_latest_enrollment(&lrn).await {
        Ok(e) => e,
        Err(e) => return Ok(storage_failure("Failed to load enrollment", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        LatestPaymentResponse {
            proof_payment: Some(config.upload.public_url(&payment.proof_payment)),
            date_of_payment: payment.date_of_payment,
            amount_paid: payment.amount_paid,
            payment_approval: enrollment.as_ref().and_then(|e| e.payment_approval),
            enrollment_status: enrollment.as_ref().map(|e| e.status()),
        },
        "Payment retrieved successfully",
    )))
}
