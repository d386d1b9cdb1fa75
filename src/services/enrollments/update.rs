use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use super::get::latest_or_404;
use crate::models::enrollments::requests::UpdateEnrollmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{
    invalid_reference, not_found, storage_failure, validation_failed,
};

pub async fn update_enrollment(
    service: &EnrollmentService,
    lrn: String,
    update_request: UpdateEnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let changes = match update_request.validate() {
        Ok(c) => c,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(section_id) = changes.section_id {
        match storage.get_section(section_id).await {
            Ok(Some(_)) => {}
            Ok(None) => return Ok(invalid_reference("section_id")),
            Err(e) => return Ok(storage_failure("Failed to load section", e)),
        }
    }

    let enrollment = match latest_or_404(&storage, &lrn).await {
        Ok(e) => e,
        Err(resp) => return Ok(resp),
    };

    match storage.update_enrollment(enrollment.enrol_id, changes).await {
        Ok(Some(enrollment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollment,
            "Enrollment updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::EnrollmentNotFound, "Enrollment not found")),
        Err(e) => Ok(storage_failure("Failed to update enrollment", e)),
    }
}
