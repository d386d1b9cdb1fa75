use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use super::StudentService;
use crate::models::{
    ApiResponse, FieldErrors,
    students::{requests::CreateStudentRequest, responses::StudentResponse},
};
use crate::services::responses::{internal_error, storage_failure, validation_failed};
use crate::storage::Storage;
use crate::utils::password::hash_password;

/// LRN 与邮箱不能重复，返回需要报告的字段错误
pub(crate) async fn check_student_taken(
    storage: &Arc<dyn Storage>,
    lrn: &str,
    email: &str,
) -> Result<FieldErrors, HttpResponse> {
    let mut errors = FieldErrors::new();

    match storage.get_student(lrn).await {
        Ok(Some(_)) => errors.add("LRN", "The LRN has already been taken."),
        Ok(None) => {}
        Err(e) => return Err(storage_failure("Failed to check LRN", e)),
    }
    match storage.get_student_by_email(email).await {
        Ok(Some(_)) => errors.add("email", "The email has already been taken."),
        Ok(None) => {}
        Err(e) => return Err(storage_failure("Failed to check email", e)),
    }

    Ok(errors)
}

pub async fn create_student(
    service: &StudentService,
    create_request: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let student = match create_request.validate() {
        Ok(s) => s,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    match check_student_taken(&storage, &student.lrn, &student.email).await {
        Ok(errors) if !errors.is_empty() => return Ok(validation_failed(errors)),
        Ok(_) => {}
        Err(resp) => return Ok(resp),
    }

    let password_hash = match hash_password(&student.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(internal_error());
        }
    };

    match storage
        .create_student(student.into_new_student(password_hash))
        .await
    {
        Ok(student) => {
            info!("Student {} created", student.lrn);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudentResponse { student },
                "Student created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create student", e)),
    }
}
