use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use super::create::check_references;
use crate::models::grades::requests::GradeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{
    not_found, reference_failure, storage_failure, validation_failed,
};

pub async fn update_grade(
    service: &GradeService,
    grade_id: i64,
    grade_request: GradeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let grade = match grade_request.validate() {
        Ok(g) => g,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(resp) = reference_failure(
        "Failed to check grade references",
        check_references(&storage, &grade).await,
    ) {
        return Ok(resp);
    }

    match storage.update_grade(grade_id, grade).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            grade,
            "Grade updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::NotFound, "Grade not found")),
        Err(e) => Ok(storage_failure("Failed to update grade", e)),
    }
}
