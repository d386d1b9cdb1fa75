use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use crate::models::ApiResponse;
use crate::models::enrollments::requests::EnrollmentRequest;
use crate::services::responses::{invalid_reference, storage_failure, validation_failed};

/// 同一学生同一学年只有一条记录：新建返回 201，更新返回 200
pub async fn upsert_enrollment(
    service: &EnrollmentService,
    enrollment_request: EnrollmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (lrn, fields) = match enrollment_request.validate() {
        Ok(v) => v,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    match storage.get_student(&lrn).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(invalid_reference("LRN")),
        Err(e) => return Ok(storage_failure("Failed to load student", e)),
    }

    let new_enrollment =
        fields.into_new_enrollment(lrn, service.current_school_year(), chrono::Utc::now());

    match storage.upsert_enrollment(new_enrollment).await {
        Ok((enrollment, true)) => {
            info!(
                "Enrollment created for {} ({})",
                enrollment.lrn, enrollment.school_year
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                enrollment,
                "Enrollment created successfully",
            )))
        }
        Ok((enrollment, false)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollment,
            "Enrollment updated successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to save enrollment", e)),
    }
}
