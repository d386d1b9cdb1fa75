//! 消息存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::messages::{ActiveModel, Column, Entity as Messages};
use crate::errors::{PortalError, Result};
use crate::models::messages::{entities::Message, requests::NewMessage};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

impl SeaOrmStorage {
    /// 创建消息
    pub async fn create_message_impl(&self, message: NewMessage) -> Result<Message> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            message_sender: Set(message.message_sender),
            message_receiver: Set(message.message_receiver),
            message: Set(message.message),
            message_date: Set(message.message_date),
            read_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建消息失败", e))?;

        Ok(result.into_message())
    }

    /// 双方会话，任意方向，最新在前
    pub async fn list_conversation_impl(
        &self,
        party_a: &str,
        party_b: &str,
    ) -> Result<Vec<Message>> {
        let messages = Messages::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(Column::MessageSender.eq(party_a))
                            .add(Column::MessageReceiver.eq(party_b)),
                    )
                    .add(
                        Condition::all()
                            .add(Column::MessageSender.eq(party_b))
                            .add(Column::MessageReceiver.eq(party_a)),
                    ),
            )
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::MessageId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询会话失败: {e}")))?;

        Ok(messages.into_iter().map(|m| m.into_message()).collect())
    }

    /// 收件箱，最新在前
    pub async fn list_inbox_impl(&self, receiver: &str, limit: Option<u64>) -> Result<Vec<Message>> {
        let mut select = Messages::find()
            .filter(Column::MessageReceiver.eq(receiver))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::MessageId);

        if let Some(limit) = limit {
            select = select.limit(limit);
        }

        let messages = select
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询收件箱失败: {e}")))?;

        Ok(messages.into_iter().map(|m| m.into_message()).collect())
    }

    /// 标记已读，只在 read_at 为空时写入
    pub async fn mark_message_read_impl(
        &self,
        message_id: i64,
        read_at: i64,
    ) -> Result<Option<Message>> {
        Messages::update_many()
            .col_expr(Column::ReadAt, sea_orm::sea_query::Expr::value(read_at))
            .filter(Column::MessageId.eq(message_id))
            .filter(Column::ReadAt.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("标记消息已读失败: {e}")))?;

        let message = Messages::find_by_id(message_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询消息失败: {e}")))?;

        Ok(message.map(|m| m.into_message()))
    }
}
