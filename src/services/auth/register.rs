use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use crate::models::{
    ApiResponse, FieldErrors,
    admins::{
        requests::{CreateAdminRequest, NewAdmin},
        responses::AdminResponse,
    },
};
use crate::services::responses::{internal_error, storage_failure, validation_failed};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_admin_id;

use super::AuthService;

pub async fn handle_create_admin(
    service: &AuthService,
    create_request: CreateAdminRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let admin = match create_request.validate() {
        Ok(a) => a,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    // 1. 检查编号与邮箱是否已被占用
    match check_taken(&storage, admin.admin_id.as_deref(), &admin.email).await {
        Ok(errors) if !errors.is_empty() => return Ok(validation_failed(errors)),
        Ok(_) => {}
        Err(resp) => return Ok(resp),
    }

    // 2. 哈希密码
    let password_hash = match hash_password(&admin.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Password hashing failed: {}", e);
            return Ok(internal_error());
        }
    };

    // 3. 创建管理员，未指定编号时自动生成
    let new_admin = NewAdmin {
        admin_id: admin.admin_id.unwrap_or_else(generate_admin_id),
        fname: admin.fname,
        mname: admin.mname,
        lname: admin.lname,
        email: admin.email,
        password_hash,
    };

    match storage.create_admin(new_admin).await {
        Ok(admin) => {
            info!("Admin {} created", admin.admin_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AdminResponse { admin },
                "Admin created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create admin", e)),
    }
}

async fn check_taken(
    storage: &Arc<dyn Storage>,
    admin_id: Option<&str>,
    email: &str,
) -> Result<FieldErrors, HttpResponse> {
    let mut errors = FieldErrors::new();

    if let Some(id) = admin_id {
        match storage.find_party(id).await {
            Ok(Some(_)) => errors.add("admin_id", "The admin_id has already been taken."),
            Ok(None) => {}
            Err(e) => return Err(storage_failure("Failed to check admin id", e)),
        }
    }

    match storage.get_admin_by_email(email).await {
        Ok(Some(_)) => errors.add("email", "The email has already been taken."),
        Ok(None) => {}
        Err(e) => return Err(storage_failure("Failed to check admin email", e)),
    }

    Ok(errors)
}
