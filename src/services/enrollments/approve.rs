use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use super::get::latest_or_404;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_failure};
use crate::storage::EnrollmentStamp;

/// 在学生最近的入学记录上写入审核时间
pub async fn approve(
    service: &EnrollmentService,
    lrn: String,
    stamp: EnrollmentStamp,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollment = match latest_or_404(&storage, &lrn).await {
        Ok(e) => e,
        Err(resp) => return Ok(resp),
    };

    let now = chrono::Utc::now().timestamp();
    match storage
        .stamp_enrollment(enrollment.enrol_id, stamp, now)
        .await
    {
        Ok(Some(enrollment)) => {
            let message = match stamp {
                EnrollmentStamp::Registration => "Registration approved successfully",
                EnrollmentStamp::Payment => "Payment approved successfully",
            };
            info!("{:?} approval stamped on enrollment {}", stamp, enrollment.enrol_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment, message)))
        }
        Ok(None) => Ok(not_found(ErrorCode::EnrollmentNotFound, "Enrollment not found")),
        Err(e) => Ok(storage_failure("Failed to approve enrollment", e)),
    }
}
