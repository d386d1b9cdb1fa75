//! 缴费记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub payment_id: i64,
    pub lrn: String,
    #[sea_orm(unique)]
    pub or_number: String,
    #[sea_orm(column_type = "Double")]
    pub amount_paid: f64,
    pub proof_payment: String,
    pub description: String,
    pub date_of_payment: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::Lrn",
        to = "super::students::Column::Lrn"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_payment(self) -> crate::models::payments::entities::Payment {
        use crate::models::payments::entities::Payment;
        use chrono::{DateTime, Utc};

        Payment {
            payment_id: self.payment_id,
            lrn: self.lrn,
            or_number: self.or_number,
            amount_paid: self.amount_paid,
            proof_payment: self.proof_payment,
            description: self.description,
            date_of_payment: self.date_of_payment,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            proof_url: None,
        }
    }
}
