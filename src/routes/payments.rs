use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::parties::entities::PartyKind;
use crate::models::payments::requests::PaymentListParams;
use crate::services::PaymentService;
use crate::utils::{SafeIDI64, SafePartyId};

// 懒加载的全局 PaymentService 实例
static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

pub async fn list_payments(
    req: HttpRequest,
    query: web::Query<PaymentListParams>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.list_payments(query.into_inner(), &req).await
}

pub async fn create_payment(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.create_payment(payload, &req).await
}

pub async fn get_payment(req: HttpRequest, payment_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.get_payment(payment_id.0, &req).await
}

pub async fn payment_history(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.get_payment_history(lrn.0, &req).await
}

pub async fn latest_payment(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE.get_latest_payment(lrn.0, &req).await
}

// 配置路由，缴费记录只追加，不提供修改与删除
pub fn configure_payment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/payment/{lrn}")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(latest_payment)),
    )
    .service(
        web::scope("/api/v1/payments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_payments)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    )
                    .route(
                        web::post()
                            .to(create_payment)
                            .wrap(middlewares::RateLimit::file_upload()),
                    ),
            )
            .route("/history/{lrn}", web::get().to(payment_history))
            .route("/{id}", web::get().to(get_payment)),
    );
}
