use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use super::get::latest_or_404;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_failure};

pub async fn delete_enrollment(
    service: &EnrollmentService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollment = match latest_or_404(&storage, &lrn).await {
        Ok(e) => e,
        Err(resp) => return Ok(resp),
    };

    match storage.delete_enrollment(enrollment.enrol_id).await {
        Ok(true) => {
            info!(
                "Enrollment {} of {} ({}) deleted",
                enrollment.enrol_id, lrn, enrollment.school_year
            );
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
                "Enrollment deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::EnrollmentNotFound, "Enrollment not found")),
        Err(e) => Ok(storage_failure("Failed to delete enrollment", e)),
    }
}
