use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::{PaymentService, with_proof_url};
use crate::errors::{PortalError, Result};
use crate::models::payments::requests::{NewPayment, PaymentForm};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{
    file_store_failure, forbid_other_student, internal_error, not_found, storage_failure, upload_failure,
    validation_failed,
};
use crate::storage::Storage;
use crate::utils::multipart::{UploadRules, read_multipart, safe_file_stem};
use crate::utils::random_code::generate_or_number;

const PROOF_FIELD: &str = "proof_payment";
const MAX_OR_ATTEMPTS: usize = 10;

/// 生成未被使用的收据号
async fn unique_or_number(storage: &Arc<dyn Storage>) -> Result<String> {
    for _ in 0..MAX_OR_ATTEMPTS {
        let candidate = generate_or_number();
        if !storage.or_number_exists(&candidate).await? {
            return Ok(candidate);
        }
    }
    Err(PortalError::conflict("Unable to generate a unique OR number"))
}

pub async fn create_payment(
    service: &PaymentService,
    payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    let mut form = match read_multipart(
        payload,
        &config.upload.dir,
        UploadRules {
            field: PROOF_FIELD,
            allowed_types: &config.upload.allowed_types,
            max_size: config.upload.max_size,
        },
    )
    .await
    {
        Ok(form) => form,
        Err(e) => return Ok(upload_failure(PROOF_FIELD, e)),
    };

    // 缺少凭证文件同样是字段错误，绝不写入空路径
    let payment_form = PaymentForm {
        lrn: form.text("LRN"),
        amount_paid: form.text("amount_paid"),
        description: form.text("description"),
        date_of_payment: form.text("date_of_payment"),
        has_proof: form.file.is_some(),
    };
    let payment = match payment_form.validate() {
        Ok(p) => p,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let Some(proof) = form.file.take() else {
        return Ok(internal_error());
    };
    if let Some(resp) = forbid_other_student(request, &payment.lrn) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);
    let student = match storage.get_student(&payment.lrn).await {
        Ok(Some(s)) => s,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(storage_failure("Failed to load student", e)),
    };

    let or_number = match unique_or_number(&storage).await {
        Ok(or) => or,
        Err(e) => {
            error!("OR number generation failed: {}", e);
            return Ok(internal_error());
        }
    };

    let relative = format!(
        "payments/{}_{}_{}{}",
        safe_file_stem(&student.lname),
        student.lrn,
        or_number,
        proof.extension
    );
    if let Err(e) = proof.persist(&config.upload.dir, &relative) {
        error!("Failed to store payment proof for {}: {}", student.lrn, e);
        return Ok(file_store_failure());
    }

    let new_payment = NewPayment {
        lrn: payment.lrn,
        or_number,
        amount_paid: payment.amount_paid,
        proof_payment: relative.clone(),
        description: payment.description,
        date_of_payment: payment.date_of_payment,
    };

    match storage.create_payment(new_payment).await {
        Ok(payment) => {
            info!(
                "Payment {} recorded for {} (OR {})",
                payment.payment_id, payment.lrn, payment.or_number
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                with_proof_url(payment, &config.upload),
                "Payment submitted successfully",
            )))
        }
        Err(e) => {
            let stored = Path::new(&config.upload.dir).join(&relative);
            if let Err(remove_err) = std::fs::remove_file(&stored) {
                warn!("Failed to remove {}: {}", stored.display(), remove_err);
            }
            Ok(storage_failure("Failed to record payment", e))
        }
    }
}
