use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::AnnouncementService;
use crate::errors::Result;
use crate::models::announcements::requests::{AnnouncementRequest, NewAnnouncement};
use crate::models::{ApiResponse, FieldErrors};
use crate::services::responses::{reference_failure, storage_failure, validation_failed};
use crate::storage::Storage;
use crate::utils::validate::FieldValidator;

/// 发布人必须存在；课程班可空，给出时必须存在
pub(crate) async fn check_references(
    storage: &Arc<dyn Storage>,
    announcement: &NewAnnouncement,
) -> Result<FieldErrors> {
    let mut v = FieldValidator::new();
    if storage.get_admin(&announcement.admin_id).await?.is_none() {
        v.invalid_reference("admin_id");
    }
    if let Some(class_id) = announcement.class_id {
        if storage.get_class(class_id).await?.is_none() {
            v.invalid_reference("class_id");
        }
    }
    Ok(v.into_errors())
}

pub async fn create_announcement(
    service: &AnnouncementService,
    announcement_request: AnnouncementRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let announcement = match announcement_request.validate() {
        Ok(a) => a,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);

    if let Some(resp) = reference_failure(
        "Failed to check announcement references",
        check_references(&storage, &announcement).await,
    ) {
        return Ok(resp);
    }

    match storage.create_announcement(announcement).await {
        Ok(announcement) => {
            info!(
                "Announcement {} posted by {}",
                announcement.ancmnt_id, announcement.admin_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                announcement,
                "Announcement created successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to create announcement", e)),
    }
}
