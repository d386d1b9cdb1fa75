use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{forbid_other_student, not_found, storage_failure};

pub async fn get_grade(
    service: &GradeService,
    grade_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_grade(grade_id).await {
        Ok(Some(grade)) => {
            if let Some(resp) = forbid_other_student(request, &grade.lrn) {
                return Ok(resp);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                grade,
                "Grade retrieved successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::NotFound, "Grade not found")),
        Err(e) => Ok(storage_failure("Failed to get grade", e)),
    }
}
