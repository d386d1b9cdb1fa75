//! 花名册存储操作
//!
//! (LRN, class_id) 唯一，重复加入由唯一约束拒绝。

use super::{SeaOrmStorage, write_error};
use crate::entity::rosters::{ActiveModel, Column, Entity as Rosters};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    grades::requests::ClassRecordQuery,
    rosters::{entities::Roster, requests::NewRoster, responses::RosterListResponse},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_roster_impl(&self, roster: NewRoster) -> Result<Roster> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            lrn: Set(roster.lrn),
            class_id: Set(roster.class_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("加入花名册失败", e))?;

        Ok(result.into_roster())
    }

    pub async fn get_roster_impl(&self, roster_id: i64) -> Result<Option<Roster>> {
        let result = Rosters::find_by_id(roster_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询花名册失败: {e}")))?;

        Ok(result.map(|m| m.into_roster()))
    }

    pub async fn list_rosters_with_pagination_impl(
        &self,
        query: ClassRecordQuery,
    ) -> Result<RosterListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Rosters::find();
        if let Some(ref lrn) = query.lrn {
            select = select.filter(Column::Lrn.eq(lrn.as_str()));
        }
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let paginator = select
            .order_by_asc(Column::ClassId)
            .order_by_asc(Column::Lrn)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询花名册总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询花名册页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询花名册列表失败: {e}")))?;

        Ok(RosterListResponse {
            items: items.into_iter().map(|m| m.into_roster()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn delete_roster_impl(&self, roster_id: i64) -> Result<bool> {
        let result = Rosters::delete_by_id(roster_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("移出花名册失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
