use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PaymentService, with_proof_url};
use crate::models::ApiResponse;
use crate::models::payments::requests::{PaymentListParams, PaymentListQuery};
use crate::models::payments::responses::PaymentListResponse;
use crate::services::responses::storage_failure;

pub async fn list_payments(
    service: &PaymentService,
    query: PaymentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let list_query = PaymentListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        lrn: query.lrn.filter(|s| !s.trim().is_empty()),
    };

    match storage.list_payments_with_pagination(list_query).await {
        Ok(response) => {
            let response = PaymentListResponse {
                items: response
                    .items
                    .into_iter()
                    .map(|p| with_proof_url(p, &config.upload))
                    .collect(),
                pagination: response.pagination,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Payments retrieved successfully",
            )))
        }
        Err(e) => Ok(storage_failure("Failed to list payments", e)),
    }
}
