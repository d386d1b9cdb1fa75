//! 对账单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "financial_statements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub soa_id: i64,
    pub lrn: String,
    pub filename: String,
    pub date_uploaded: i64,
    pub created_at: i64,
    pub updated_at: i64,
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
    pub fn into_financial_statement(
        self,
    ) -> crate::models::financial_statements::entities::FinancialStatement {
        use crate::models::financial_statements::entities::FinancialStatement;
        use chrono::{DateTime, Utc};

        FinancialStatement {
            soa_id: self.soa_id,
            lrn: self.lrn,
            filename: self.filename,
            date_uploaded: DateTime::<Utc>::from_timestamp(self.date_uploaded, 0)
                .unwrap_or_default(),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
