use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode, FieldErrors,
    students::{requests::UpdateStudentRequest, responses::StudentResponse},
};
use crate::services::responses::{
    forbid_other_student, not_found, storage_failure, validation_failed,
};

pub async fn update_student(
    service: &StudentService,
    lrn: String,
    update_request: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let changes = match update_request.validate() {
        Ok(c) => c,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }
    let storage = service.get_storage(request);

    // 新邮箱不能被其他学生占用
    if let Some(email) = &changes.email {
        match storage.get_student_by_email(email).await {
            Ok(Some(other)) if other.lrn != lrn => {
                return Ok(validation_failed(FieldErrors::single(
                    "email",
                    "The email has already been taken.",
                )));
            }
            Ok(_) => {}
            Err(e) => return Ok(storage_failure("Failed to check email", e)),
        }
    }

    match storage.update_student(&lrn, changes).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "Student updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(storage_failure("Failed to update student", e)),
    }
}
