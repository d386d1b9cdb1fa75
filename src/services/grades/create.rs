use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::GradeService;
use crate::errors::Result;
use crate::models::grades::requests::{GradeRequest, NewGrade};
use crate::models::{ApiResponse, FieldErrors};
use crate::services::responses::{reference_failure, storage_failure, validation_failed};
use crate::storage::Storage;
use crate::utils::validate::FieldValidator;

/// 学生与课程班必须存在
pub(crate) async fn check_references(
    storage: &Arc<dyn Storage>,
    grade: &NewGrade,
) -> Result<FieldErrors> {
    let mut v = FieldValidator::new();
    if storage.get_student(&grade.lrn).await?.is_none() {
        v.invalid_reference("LRN");
    }
    if storage.get_class(grade.class_id).await?.is_none() {
        v.invalid_reference("class_id");
    }
    Ok(v.into_errors())
}

pub async fn create_grade(
    service: &GradeService,
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

    match storage.create_grade(grade).await {
        Ok(grade) => {
            info!(
                "Grade {} recorded for {} in class {}",
                grade.grade_id, grade.lrn, grade.class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                grade,
                "Grade created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create grade", e)),
    }
}
