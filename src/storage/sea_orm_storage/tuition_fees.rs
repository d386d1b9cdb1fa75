//! 学费标准存储操作（每个年级一条）

use super::{SeaOrmStorage, write_error};
use crate::entity::tuition_fees::{ActiveModel, Column, Entity as TuitionFees};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    tuition_fees::{
        entities::TuitionFee, requests::NewTuitionFee, responses::TuitionFeeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_tuition_fee_impl(&self, fee: NewTuitionFee) -> Result<TuitionFee> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            grade_level: Set(fee.grade_level),
            tuition: Set(fee.tuition),
            general: Set(fee.general),
            esc: Set(fee.esc),
            subsidy: Set(fee.subsidy),
            req_downpayment: Set(fee.req_downpayment),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建学费标准失败", e))?;

        Ok(result.into_tuition_fee())
    }

    pub async fn get_tuition_fee_impl(&self, fee_id: i64) -> Result<Option<TuitionFee>> {
        let result = TuitionFees::find_by_id(fee_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学费标准失败: {e}")))?;

        Ok(result.map(|m| m.into_tuition_fee()))
    }

    pub async fn get_tuition_fee_by_grade_impl(
        &self,
        grade_level: &str,
    ) -> Result<Option<TuitionFee>> {
        let result = TuitionFees::find()
            .filter(Column::GradeLevel.eq(grade_level))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学费标准失败: {e}")))?;

        Ok(result.map(|m| m.into_tuition_fee()))
    }

    pub async fn list_tuition_fees_with_pagination_impl(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<TuitionFeeListResponse> {
        let (page, size) = PaginationQuery::normalized(page, size);

        let paginator = TuitionFees::find()
            .order_by_asc(Column::GradeLevel)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学费标准总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学费标准页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学费标准列表失败: {e}")))?;

        Ok(TuitionFeeListResponse {
            items: items.into_iter().map(|m| m.into_tuition_fee()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_tuition_fee_impl(
        &self,
        fee_id: i64,
        fee: NewTuitionFee,
    ) -> Result<Option<TuitionFee>> {
        if self.get_tuition_fee_impl(fee_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            fee_id: Set(fee_id),
            grade_level: Set(fee.grade_level),
            tuition: Set(fee.tuition),
            general: Set(fee.general),
            esc: Set(fee.esc),
            subsidy: Set(fee.subsidy),
            req_downpayment: Set(fee.req_downpayment),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新学费标准失败", e))?;

        Ok(Some(result.into_tuition_fee()))
    }

    pub async fn delete_tuition_fee_impl(&self, fee_id: i64) -> Result<bool> {
        let result = TuitionFees::delete_by_id(fee_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除学费标准失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
