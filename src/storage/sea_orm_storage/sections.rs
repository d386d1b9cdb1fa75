//! 分组存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::sections::{ActiveModel, Column, Entity as Sections};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    sections::{entities::Section, requests::NewSection, responses::SectionListResponse},
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_section_impl(&self, section: NewSection) -> Result<Section> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            section_name: Set(section.section_name),
            grade_level: Set(section.grade_level),
            strand: Set(section.strand),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建分组失败", e))?;

        Ok(result.into_section())
    }

    pub async fn get_section_impl(&self, section_id: i64) -> Result<Option<Section>> {
        let result = Sections::find_by_id(section_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询分组失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    pub async fn list_sections_with_pagination_impl(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<SectionListResponse> {
        let (page, size) = PaginationQuery::normalized(page, size);

        let paginator = Sections::find()
            .order_by_asc(Column::GradeLevel)
            .order_by_asc(Column::SectionName)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询分组总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询分组页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询分组列表失败: {e}")))?;

        Ok(SectionListResponse {
            items: items.into_iter().map(|m| m.into_section()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_section_impl(
        &self,
        section_id: i64,
        section: NewSection,
    ) -> Result<Option<Section>> {
        if self.get_section_impl(section_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            section_id: Set(section_id),
            section_name: Set(section.section_name),
            grade_level: Set(section.grade_level),
            strand: Set(section.strand),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新分组失败", e))?;

        Ok(Some(result.into_section()))
    }

    pub async fn delete_section_impl(&self, section_id: i64) -> Result<bool> {
        let result = Sections::delete_by_id(section_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除分组失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
