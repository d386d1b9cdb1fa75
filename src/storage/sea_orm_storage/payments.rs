//! 缴费存储操作（只追加）

use super::{SeaOrmStorage, write_error};
use crate::entity::payments::{ActiveModel, Column, Entity as Payments};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    payments::{
        entities::Payment,
        requests::{NewPayment, PaymentListQuery},
        responses::PaymentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_payment_impl(&self, payment: NewPayment) -> Result<Payment> {
        let model = ActiveModel {
            lrn: Set(payment.lrn),
            or_number: Set(payment.or_number),
            amount_paid: Set(payment.amount_paid),
            proof_payment: Set(payment.proof_payment),
            description: Set(payment.description),
            date_of_payment: Set(payment.date_of_payment),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建缴费记录失败", e))?;

        Ok(result.into_payment())
    }

    pub async fn or_number_exists_impl(&self, or_number: &str) -> Result<bool> {
        let count = Payments::find()
            .filter(Column::OrNumber.eq(or_number))
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询收据号失败: {e}")))?;

        Ok(count > 0)
    }

    pub async fn get_payment_impl(&self, payment_id: i64) -> Result<Option<Payment>> {
        let result = Payments::find_by_id(payment_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(result.map(|m| m.into_payment()))
    }

    pub async fn list_payments_with_pagination_impl(
        &self,
        query: PaymentListQuery,
    ) -> Result<PaymentListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Payments::find();
        if let Some(ref lrn) = query.lrn {
            select = select.filter(Column::Lrn.eq(lrn.as_str()));
        }
        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::PaymentId);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询缴费总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询缴费页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询缴费列表失败: {e}")))?;

        Ok(PaymentListResponse {
            items: items.into_iter().map(|m| m.into_payment()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn list_student_payments_impl(&self, lrn: &str) -> Result<Vec<Payment>> {
        let items = Payments::find()
            .filter(Column::Lrn.eq(lrn))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::PaymentId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_payment()).collect())
    }
}
