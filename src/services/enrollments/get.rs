use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::EnrollmentService;
use crate::models::enrollments::entities::Enrollment;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{forbid_other_student, not_found, storage_failure};
use crate::storage::Storage;

/// 学生最近一个学年的入学记录，不存在时返回 404 响应
pub(crate) async fn latest_or_404(
    storage: &Arc<dyn Storage>,
    lrn: &str,
) -> Result<Enrollment, HttpResponse> {
    match storage.get_latest_enrollment(lrn).await {
        Ok(Some(enrollment)) => Ok(enrollment),
        Ok(None) => Err(not_found(ErrorCode::EnrollmentNotFound, "Enrollment not found")),
        Err(e) => Err(storage_failure("Failed to load enrollment", e)),
    }
}

pub async fn get_enrollment(
    service: &EnrollmentService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);

    match latest_or_404(&storage, &lrn).await {
        Ok(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollment,
            "Enrollment retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
