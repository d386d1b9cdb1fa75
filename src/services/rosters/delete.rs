use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RosterService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::responses::{not_found, storage_failure};

pub async fn delete_roster(
    service: &RosterService,
    roster_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_roster(roster_id).await {
        Ok(true) => {
            info!("Roster entry {} deleted", roster_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Roster entry deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found(ErrorCode::NotFound, "Roster not found")),
        Err(e) => Ok(storage_failure("Failed to delete roster entry", e)),
    }
}
