use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::models::ApiResponse;
use crate::models::enrollments::{requests::SignUpRequest, responses::SignUpResponse};
use crate::services::responses::{internal_error, storage_failure, validation_failed};
use crate::services::students::create::check_student_taken;
use crate::utils::password::hash_password;

/// 学生与首条入学记录在同一事务中写入
pub async fn sign_up(
    service: &EnrollmentService,
    sign_up_request: SignUpRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (student, enrollment) = match sign_up_request.validate() {
        Ok(v) => v,
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

    let lrn = student.lrn.clone();
    let new_student = student.into_new_student(password_hash);
    let new_enrollment =
        enrollment.into_new_enrollment(lrn, service.current_school_year(), chrono::Utc::now());

    match storage.sign_up(new_student, new_enrollment).await {
        Ok((student, enrollment)) => {
            info!(
                "Student {} signed up for {}",
                student.lrn, enrollment.school_year
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                SignUpResponse {
                    student,
                    enrollment,
                },
                "Enrollment submitted successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to sign up student", e)),
    }
}
