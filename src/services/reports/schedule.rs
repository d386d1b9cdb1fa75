use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReportService;
use crate::models::reports::responses::StudentClasses;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{forbid_other_student, not_found, storage_failure};

pub async fn class_schedule(
    service: &ReportService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);

    // 没有入学记录时按学生不存在处理
    let enrollment = match storage.get_latest_enrollment(&lrn).await {
        Ok(Some(e)) => e,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(storage_failure("Failed to load enrollment", e)),
    };

    match storage.list_class_schedule(&lrn).await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentClasses {
                enrollment,
                classes,
            },
            "Classes retrieved successfully",
        ))),
        Err(e) => Ok(storage_failure("Failed to load classes", e)),
    }
}
