use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::path::Path;
use tracing::{error, warn};

use super::StudentService;
use crate::models::students::responses::ProfileImageResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{
    field_error, file_store_failure, forbid_other_student, not_found, storage_failure,
    upload_failure,
};
use crate::utils::multipart::{UploadRules, read_multipart, safe_file_stem};

const PROFILE_FIELD: &str = "student_pic";

/// 头像存放在 `profiles/{lname}_{时间戳}.{ext}`，替换后删除旧文件
pub async fn upload_profile(
    service: &StudentService,
    payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let allowed_types = config.upload.profile_image_types();

    let mut form = match read_multipart(
        payload,
        &config.upload.dir,
        UploadRules {
            field: PROFILE_FIELD,
            allowed_types: &allowed_types,
            max_size: config.upload.profile_max_size,
        },
    )
    .await
    {
        Ok(form) => form,
        Err(e) => return Ok(upload_failure(PROFILE_FIELD, e)),
    };

    let Some(lrn) = form.text("LRN") else {
        return Ok(field_error("LRN", "The LRN field is required."));
    };
    let Some(file) = form.file.take() else {
        return Ok(field_error(
            PROFILE_FIELD,
            format!("The {PROFILE_FIELD} field is required."),
        ));
    };
    if let Some(resp) = forbid_other_student(request, &lrn) {
        return Ok(resp);
    }

    let storage = service.get_storage(request);
    let student = match storage.get_student(&lrn).await {
        Ok(Some(s)) => s,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => return Ok(storage_failure("Failed to load student", e)),
    };

    let relative = format!(
        "profiles/{}_{}{}",
        safe_file_stem(&student.lname),
        chrono::Utc::now().timestamp(),
        file.extension
    );
    if let Err(e) = file.persist(&config.upload.dir, &relative) {
        error!("Failed to store profile picture for {}: {}", lrn, e);
        return Ok(file_store_failure());
    }

    if let Err(e) = storage.update_student_pic(&lrn, &relative).await {
        remove_upload(&config.upload.dir, &relative);
        return Ok(storage_failure("Failed to update profile picture", e));
    }

    if let Some(old) = student.student_pic.filter(|old| *old != relative) {
        remove_upload(&config.upload.dir, &old);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ProfileImageResponse {
            image_url: config.upload.public_url(&relative),
        },
        "Profile picture uploaded successfully",
    )))
}

fn remove_upload(upload_dir: &str, relative: &str) {
    let path = Path::new(upload_dir).join(relative);
    if !path.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_file(&path) {
        warn!("Failed to remove {}: {}", path.display(), e);
    }
}

pub async fn get_profile_image(
    service: &StudentService,
    lrn: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    match storage.get_student(&lrn).await {
        Ok(Some(student)) => match student.student_pic.filter(|p| !p.is_empty()) {
            Some(path) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                ProfileImageResponse {
                    image_url: config.upload.public_url(&path),
                },
                "Profile image retrieved successfully",
            ))),
            None => Ok(not_found(
                ErrorCode::ProfileImageNotFound,
                "Profile image not found",
            )),
        },
        Ok(None) => Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Ok(storage_failure("Failed to load student", e)),
    }
}
