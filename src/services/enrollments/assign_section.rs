use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EnrollmentService;
use super::get::latest_or_404;
use crate::models::enrollments::requests::{AssignSectionRequest, EnrollmentChanges};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{
    invalid_reference, not_found, storage_failure, validation_failed,
};

/// 分组年级需与入学年级一致，两侧都去掉首尾空白后比较
pub fn grade_levels_match(section_grade: &str, enrollment_grade: &str) -> bool {
    section_grade.trim().eq_ignore_ascii_case(enrollment_grade.trim())
}

pub async fn assign_section(
    service: &EnrollmentService,
    lrn: String,
    assign_request: AssignSectionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let section_id = match assign_request.validate() {
        Ok(id) => id,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    let section = match storage.get_section(section_id).await {
        Ok(Some(section)) => section,
        Ok(None) => return Ok(invalid_reference("section_id")),
        Err(e) => return Ok(storage_failure("Failed to load section", e)),
    };

    let enrollment = match latest_or_404(&storage, &lrn).await {
        Ok(e) => e,
        Err(resp) => return Ok(resp),
    };

    if !grade_levels_match(&section.grade_level, &enrollment.grade_level) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::GradeLevelMismatch,
            "Grade level mismatch between section and enrollment",
        )));
    }

    let changes = EnrollmentChanges {
        section_id: Some(section.section_id),
        ..Default::default()
    };
    match storage.update_enrollment(enrollment.enrol_id, changes).await {
        Ok(Some(enrollment)) => {
            info!("Student {} assigned to section {}", lrn, section.section_name);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                enrollment,
                "Section assigned successfully",
            )))
        }
        Ok(None) => Ok(not_found(ErrorCode::EnrollmentNotFound, "Enrollment not found")),
        Err(e) => Ok(storage_failure("Failed to assign section", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_levels_match() {
        assert!(grade_levels_match("Grade 7", "grade 7"));
        assert!(grade_levels_match(" 11 ", "11"));
        assert!(!grade_levels_match("Grade 7", "Grade 8"));
    }
}
