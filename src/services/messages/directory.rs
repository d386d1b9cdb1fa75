use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MessageService;
use crate::models::{
    ApiResponse,
    parties::entities::{Party, Recipient},
};
use crate::services::responses::storage_failure;

/// 全部学生与管理员
pub async fn list_recipients(
    service: &MessageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_parties().await {
        Ok(parties) => {
            let recipients: Vec<Recipient> = parties.into_iter().map(Recipient::from).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                recipients,
                "Recipients retrieved successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to list recipients", e)),
    }
}

pub async fn list_admins(
    service: &MessageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_admins().await {
        Ok(admins) => {
            let parties: Vec<Party> = admins.iter().map(|a| a.as_party()).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                parties,
                "Admins retrieved successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to list admins", e)),
    }
}
