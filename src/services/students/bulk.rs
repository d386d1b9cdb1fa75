use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{
    ApiResponse, FieldErrors,
    students::requests::{BulkStudentRequest, NewStudent, ValidatedStudent},
};
use crate::services::responses::{
    field_error, internal_error, storage_failure, validation_failed,
};
use crate::utils::password::hash_password;

/// 逐条校验，错误字段带上 `students.{序号}.` 前缀
pub fn validate_bulk(request: &BulkStudentRequest) -> Result<Vec<ValidatedStudent>, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut students = Vec::with_capacity(request.students.len());

    for (index, item) in request.students.iter().enumerate() {
        match item.validate() {
            Ok(student) => students.push(student),
            Err(e) => errors.merge(e.with_prefix(&format!("students.{index}"))),
        }
    }

    if errors.is_empty() {
        Ok(students)
    } else {
        Err(errors)
    }
}

pub async fn bulk_upsert(
    service: &StudentService,
    bulk_request: BulkStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if bulk_request.students.is_empty() {
        return Ok(field_error("students", "The students field is required."));
    }
    let validated = match validate_bulk(&bulk_request) {
        Ok(list) => list,
        Err(errors) => return Ok(validation_failed(errors)),
    };

    let mut students: Vec<NewStudent> = Vec::with_capacity(validated.len());
    for student in validated {
        match hash_password(&student.password) {
            Ok(hash) => students.push(student.into_new_student(hash)),
            Err(e) => {
                error!("Password hashing failed: {}", e);
                return Ok(internal_error());
            }
        }
    }

    let storage = service.get_storage(request);
    match storage.upsert_students(students).await {
        Ok(result) => {
            info!(
                "Bulk student import: {} created, {} updated",
                result.created, result.updated
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                result,
                "Students imported successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to import students", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::requests::CreateStudentRequest;

    fn student(lrn: &str, email: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            lrn: Some(lrn.into()),
            fname: Some("Juan".into()),
            lname: Some("Cruz".into()),
            email: Some(email.into()),
            password: Some("password1".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_bulk_errors_are_indexed() {
        let request = BulkStudentRequest {
            students: vec![
                student("123456789012", "a@school.ph"),
                student("123456789013", "not-an-email"),
            ],
        };
        let errors = validate_bulk(&request).unwrap_err();
        assert!(errors.has("students.1.email"));
        assert!(!errors.has("students.0.email"));
    }

    #[test]
    fn test_bulk_all_valid() {
        let request = BulkStudentRequest {
            students: vec![
                student("123456789012", "a@school.ph"),
                student("123456789013", "b@school.ph"),
            ],
        };
        let students = validate_bulk(&request).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].lrn, "123456789013");
    }
}
