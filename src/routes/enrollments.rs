use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{
    AssignSectionRequest, EnrollmentListParams, EnrollmentRequest, SignUpRequest,
    UpdateEnrollmentRequest,
};
use crate::models::parties::entities::PartyKind;
use crate::services::EnrollmentService;
use crate::utils::SafePartyId;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrollments(query.into_inner(), &req)
        .await
}

pub async fn upsert_enrollment(
    req: HttpRequest,
    enrollment_data: web::Json<EnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .upsert_enrollment(enrollment_data.into_inner(), &req)
        .await
}

pub async fn sign_up(
    req: HttpRequest,
    sign_up_data: web::Json<SignUpRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .sign_up(sign_up_data.into_inner(), &req)
        .await
}

pub async fn get_enrollment(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.get_enrollment(lrn.0, &req).await
}

pub async fn update_enrollment(
    req: HttpRequest,
    lrn: SafePartyId,
    update_data: web::Json<UpdateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_enrollment(lrn.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_enrollment(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.delete_enrollment(lrn.0, &req).await
}

pub async fn approve_registration(
    req: HttpRequest,
    lrn: SafePartyId,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.approve_registration(lrn.0, &req).await
}

pub async fn approve_payment(req: HttpRequest, lrn: SafePartyId) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.approve_payment(lrn.0, &req).await
}

pub async fn assign_section(
    req: HttpRequest,
    lrn: SafePartyId,
    assign_data: web::Json<AssignSectionRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .assign_section(lrn.0, assign_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_enrollment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // 新生注册，无需登录
        web::resource("/api/v1/enrollment").route(
            web::post()
                .to(sign_up)
                .wrap(middlewares::RateLimit::sign_up()),
        ),
    )
    .service(
        web::resource("/api/v1/student/assign-section/{lrn}")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(assign_section)
                    .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
            ),
    )
    .service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_enrollments)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    )
                    .route(
                        web::post()
                            .to(upsert_enrollment)
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
                    ),
            )
            .service(
                web::scope("/{lrn}")
                    .service(
                        web::resource("")
                            .route(web::get().to(get_enrollment))
                            .route(
                                web::put().to(update_enrollment).wrap(
                                    middlewares::RequireRole::new_any(PartyKind::admin_kinds()),
                                ),
                            )
                            .route(
                                web::delete().to(delete_enrollment).wrap(
                                    middlewares::RequireRole::new_any(PartyKind::admin_kinds()),
                                ),
                            ),
                    )
                    .service(
                        web::scope("")
                            .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds()))
                            .route("/approve-registration", web::put().to(approve_registration))
                            .route("/approve-payment", web::put().to(approve_payment)),
                    ),
            ),
    );
}
