pub mod conversation;
pub mod directory;
pub mod inbox;
pub mod read;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::messages::requests::{PartyQuery, SendMessageRequest};
use crate::storage::Storage;

pub struct MessageService {
    storage: Option<Arc<dyn Storage>>,
}

impl MessageService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 与某个参与方的会话
    pub async fn get_conversation(
        &self,
        party_id: String,
        query: PartyQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        conversation::get_conversation(self, party_id, query, request).await
    }

    // 收件箱
    pub async fn get_inbox(
        &self,
        query: PartyQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        inbox::get_inbox(self, query, request).await
    }

    // 每个发送方的最新一条
    pub async fn get_latest_messages(
        &self,
        query: PartyQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        inbox::get_latest_messages(self, query, request).await
    }

    // 发送消息
    pub async fn send_message(
        &self,
        send_request: SendMessageRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_message(self, send_request, request).await
    }

    // 撰写消息并返回更新后的会话
    pub async fn compose_message(
        &self,
        send_request: SendMessageRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        send::compose_message(self, send_request, request).await
    }

    // 可选收件人
    pub async fn list_recipients(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        directory::list_recipients(self, request).await
    }

    // 管理员列表
    pub async fn list_admins(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        directory::list_admins(self, request).await
    }

    // 标记已读
    pub async fn mark_read(&self, message_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        read::mark_read(self, message_id, request).await
    }
}
