use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode, FieldErrors,
    auth::requests::{ProfileUpdate, UpdatePasswordRequest},
    parties::entities::PartyKind,
    students::requests::StudentChanges,
};
use crate::services::responses::{
    field_error, internal_error, not_found, storage_failure, validation_failed,
};
use crate::utils::password::{hash_password, verify_password};

use super::AuthService;

impl ProfileUpdate {
    fn into_changes(self) -> StudentChanges {
        StudentChanges {
            fname: Some(self.fname),
            mname: self.mname,
            lname: Some(self.lname),
            email: Some(self.email),
            address: Some(self.address),
            ..Default::default()
        }
    }
}

/// 学生修改自己的资料；管理员需在请求中指定 LRN
pub async fn handle_update_password(
    service: &AuthService,
    update_request: UpdatePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let update = match update_request.validate() {
        Ok(u) => u,
        Err(errors) => return Ok(validation_failed(errors)),
    };

    let Some(caller) = RequireJWT::extract_party(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    let lrn = match caller.kind {
        PartyKind::Student => caller.id.clone(),
        PartyKind::Admin => match update.lrn.clone() {
            Some(lrn) => lrn,
            None => return Ok(field_error("LRN", "The LRN field is required.")),
        },
    };

    let storage = service.get_storage(request);

    let student = match storage.get_student(&lrn).await {
        Ok(Some(s)) => s,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(storage_failure("Failed to load student", e)),
    };

    // 邮箱不能与其他学生重复
    match storage.get_student_by_email(&update.email).await {
        Ok(Some(other)) if other.lrn != student.lrn => {
            return Ok(validation_failed(FieldErrors::single(
                "email",
                "The email has already been taken.",
            )));
        }
        Ok(_) => {}
        Err(e) => return Ok(storage_failure("Failed to check email", e)),
    }

    let old_password_ok = update
        .old_password
        .as_deref()
        .is_none_or(|old| verify_password(old, &student.password_hash));
    if !old_password_ok {
        info!("Wrong password when updating profile of {}", student.lrn);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::WrongPassword,
            "Wrong password",
        )));
    }

    if let Some(new_password) = &update.new_password {
        let hash = match hash_password(new_password) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!("Password hashing failed: {}", e);
                return Ok(internal_error());
            }
        };
        if let Err(e) = storage.update_student_password(&student.lrn, &hash).await {
            return Ok(storage_failure("Failed to update password", e));
        }
    }

    match storage.update_student(&student.lrn, update.into_changes()).await {
        Ok(Some(_)) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "User details updated successfully",
        ))),
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(storage_failure("Failed to update student", e)),
    }
}
