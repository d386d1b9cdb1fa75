use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::ClassService;
use crate::errors::Result;
use crate::models::classes::requests::{ClassRequest, NewClass};
use crate::models::{ApiResponse, FieldErrors};
use crate::services::responses::{reference_failure, storage_failure, validation_failed};
use crate::storage::Storage;
use crate::utils::validate::FieldValidator;

/// 教师、科目、分组都必须存在
pub(crate) async fn check_references(
    storage: &Arc<dyn Storage>,
    class: &NewClass,
) -> Result<FieldErrors> {
    let mut v = FieldValidator::new();
    if storage.get_admin(&class.admin_id).await?.is_none() {
        v.invalid_reference("admin_id");
    }
    if storage.get_subject(class.subject_id).await?.is_none() {
        v.invalid_reference("subject_id");
    }
    if storage.get_section(class.section_id).await?.is_none() {
        v.invalid_reference("section_id");
    }
    Ok(v.into_errors())
}

pub async fn create_class(
    service: &ClassService,
    class_request: ClassRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let class = match class_request.validate() {
        Ok(c) => c,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(resp) = reference_failure(
        "Failed to check class references",
        check_references(&storage, &class).await,
    ) {
        return Ok(resp);
    }

    match storage.create_class(class).await {
        Ok(class) => {
            info!(
                "Class {} created for subject {} section {}",
                class.class_id, class.subject_id, class.section_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                class,
                "Class created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create class", e)),
    }
}
