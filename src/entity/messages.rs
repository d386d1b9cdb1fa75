//! 站内消息实体
//!
//! 发送者与接收者可能是学生也可能是管理员，表中只保存编号，不建外键。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub message_id: i64,
    pub message_sender: String,
    pub message_receiver: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub message_date: String,
    pub read_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_message(self) -> crate::models::messages::entities::Message {
        use crate::models::messages::entities::Message;
        use chrono::{DateTime, Utc};

        Message {
            message_id: self.message_id,
            message_sender: self.message_sender,
            message_receiver: self.message_receiver,
            message: self.message,
            message_date: self.message_date,
            read_at: self
                .read_at
                .and_then(|t| DateTime::<Utc>::from_timestamp(t, 0)),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
