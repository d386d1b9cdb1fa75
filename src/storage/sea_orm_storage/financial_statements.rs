//! 对账单文件存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::financial_statements::{ActiveModel, Column, Entity as FinancialStatements};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    financial_statements::{
        entities::FinancialStatement, requests::NewFinancialStatement,
        responses::FinancialStatementListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_financial_statement_impl(
        &self,
        statement: NewFinancialStatement,
        uploaded_at: i64,
    ) -> Result<FinancialStatement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            lrn: Set(statement.lrn),
            filename: Set(statement.filename),
            date_uploaded: Set(uploaded_at),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建对账单失败", e))?;

        Ok(result.into_financial_statement())
    }

    pub async fn get_financial_statement_impl(
        &self,
        soa_id: i64,
    ) -> Result<Option<FinancialStatement>> {
        let result = FinancialStatements::find_by_id(soa_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询对账单失败: {e}")))?;

        Ok(result.map(|m| m.into_financial_statement()))
    }

    pub async fn list_financial_statements_with_pagination_impl(
        &self,
        lrn: Option<String>,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<FinancialStatementListResponse> {
        let (page, size) = PaginationQuery::normalized(page, size);

        let mut select = FinancialStatements::find();
        if let Some(lrn) = lrn {
            select = select.filter(Column::Lrn.eq(lrn));
        }

        let paginator = select
            .order_by_desc(Column::DateUploaded)
            .order_by_desc(Column::SoaId)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询对账单总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询对账单页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询对账单列表失败: {e}")))?;

        Ok(FinancialStatementListResponse {
            items: items
                .into_iter()
                .map(|m| m.into_financial_statement())
                .collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn list_student_financial_statements_impl(
        &self,
        lrn: &str,
    ) -> Result<Vec<FinancialStatement>> {
        let items = FinancialStatements::find()
            .filter(Column::Lrn.eq(lrn))
            .order_by_desc(Column::DateUploaded)
            .order_by_desc(Column::SoaId)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询对账单失败: {e}")))?;

        Ok(items
            .into_iter()
            .map(|m| m.into_financial_statement())
            .collect())
    }

    pub async fn update_financial_statement_impl(
        &self,
        soa_id: i64,
        statement: NewFinancialStatement,
    ) -> Result<Option<FinancialStatement>> {
        if self.get_financial_statement_impl(soa_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            soa_id: Set(soa_id),
            lrn: Set(statement.lrn),
            filename: Set(statement.filename),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新对账单失败", e))?;

        Ok(Some(result.into_financial_statement()))
    }

    pub async fn delete_financial_statement_impl(&self, soa_id: i64) -> Result<bool> {
        let result = FinancialStatements::delete_by_id(soa_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除对账单失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
