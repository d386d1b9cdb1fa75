use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::admins::requests::CreateAdminRequest;
use crate::models::auth::requests::{LoginRequest, UpdatePasswordRequest};
use crate::models::parties::entities::PartyKind;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn student_login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .student_login(login_data.into_inner(), &req)
        .await
}

pub async fn admin_login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.admin_login(login_data.into_inner(), &req).await
}

pub async fn refresh_token(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&request).await
}

pub async fn logout(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&request).await
}

pub async fn me(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.me(&request).await
}

pub async fn update_password(
    req: HttpRequest,
    update_data: web::Json<UpdatePasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .update_password(update_data.into_inner(), &req)
        .await
}

pub async fn create_admin(
    req: HttpRequest,
    admin_data: web::Json<CreateAdminRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.create_admin(admin_data.into_inner(), &req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .route(
                "/student/login",
                web::post()
                    .to(student_login)
                    .wrap(middlewares::RateLimit::login()),
            )
            .route(
                "/admin/login",
                web::post()
                    .to(admin_login)
                    .wrap(middlewares::RateLimit::login()),
            )
            .route(
                "/refresh",
                web::post()
                    .to(refresh_token)
                    .wrap(middlewares::RateLimit::refresh_token()),
            )
            .route("/logout", web::post().to(logout))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(me)),
            ),
    )
    .service(
        // 学生修改自己的资料，管理员需指定 LRN
        web::resource("/api/v1/update-password")
            .wrap(middlewares::RequireJWT)
            .route(web::post().to(update_password)),
    )
    .service(
        web::resource("/api/v1/newAdmin")
            .wrap(middlewares::RequireJWT)
            .route(
                web::post()
                    .to(create_admin)
                    .wrap(middlewares::RequireRole::new_any(PartyKind::admin_kinds())),
            ),
    );
}
