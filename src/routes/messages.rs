use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, Route, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::messages::requests::{PartyQuery, SendMessageRequest};
use crate::models::notifications::requests::NotificationQuery;
use crate::services::{MessageService, NotificationService};
use crate::utils::{SafeIDI64, SafePartyId};

// 懒加载的全局 MessageService 实例
static MESSAGE_SERVICE: Lazy<MessageService> = Lazy::new(MessageService::new_lazy);
static NOTIFICATION_SERVICE: Lazy<NotificationService> =
    Lazy::new(NotificationService::new_lazy);

pub async fn get_conversation(
    req: HttpRequest,
    party_id: SafePartyId,
    query: web::Query<PartyQuery>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .get_conversation(party_id.0, query.into_inner(), &req)
        .await
}

pub async fn get_inbox(
    req: HttpRequest,
    query: web::Query<PartyQuery>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.get_inbox(query.into_inner(), &req).await
}

pub async fn get_latest_messages(
    req: HttpRequest,
    query: web::Query<PartyQuery>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .get_latest_messages(query.into_inner(), &req)
        .await
}

pub async fn send_message(
    req: HttpRequest,
    message_data: web::Json<SendMessageRequest>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .send_message(message_data.into_inner(), &req)
        .await
}

pub async fn compose_message(
    req: HttpRequest,
    message_data: web::Json<SendMessageRequest>,
) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE
        .compose_message(message_data.into_inner(), &req)
        .await
}

pub async fn list_recipients(req: HttpRequest) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.list_recipients(&req).await
}

pub async fn list_admins(req: HttpRequest) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.list_admins(&req).await
}

pub async fn mark_read(req: HttpRequest, message_id: SafeIDI64) -> ActixResult<HttpResponse> {
    MESSAGE_SERVICE.mark_read(message_id.0, &req).await
}

pub async fn get_notifications(
    req: HttpRequest,
    query: web::Query<NotificationQuery>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .get_feed(query.into_inner(), &req)
        .await
}

// 配置路由，路径沿用前端已在使用的写法
pub fn configure_message_routes(cfg: &mut web::ServiceConfig) {
    let routes: [(&str, Route); 9] = [
        ("/api/v1/getConvo/{id}", web::get().to(get_conversation)),
        ("/api/v1/getMessages", web::get().to(get_inbox)),
        ("/api/v1/latest-messages", web::get().to(get_latest_messages)),
        ("/api/v1/sendMessage", web::post().to(send_message)),
        ("/api/v1/composemessage", web::post().to(compose_message)),
        ("/api/v1/getrecepeints", web::get().to(list_recipients)),
        ("/api/v1/getAdmin", web::get().to(list_admins)),
        ("/api/v1/messages/{id}/read", web::put().to(mark_read)),
        ("/api/v1/notifications", web::get().to(get_notifications)),
    ];

    for (path, route) in routes {
        cfg.service(
            web::resource(path)
                .wrap(middlewares::RequireJWT)
                .route(route),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_message_routes_registered() {
        let app = test::init_service(App::new().configure(configure_message_routes)).await;

        for path in [
            "/api/v1/getConvo/ADM-0001",
            "/api/v1/getMessages",
            "/api/v1/notifications",
            "/api/v1/messages/7/read",
        ] {
            let req = test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri(path)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NO_CONTENT, "{path}");
        }

        let req = test::TestRequest::get().uri("/api/v1/getConvos").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
