//! 学费标准实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tuition_fees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub fee_id: i64,
    #[sea_orm(unique)]
    pub grade_level: String,
    #[sea_orm(column_type = "Double")]
    pub tuition: f64,
    #[sea_orm(column_type = "Double", nullable)]
    pub general: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub esc: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub subsidy: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub req_downpayment: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_tuition_fee(self) -> crate::models::tuition_fees::entities::TuitionFee {
        use crate::models::tuition_fees::entities::TuitionFee;
        use chrono::{DateTime, Utc};

        TuitionFee {
            fee_id: self.fee_id,
            grade_level: self.grade_level,
            tuition: self.tuition,
            general: self.general,
            esc: self.esc,
            subsidy: self.subsidy,
            req_downpayment: self.req_downpayment,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
