//! 科目存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    subjects::{entities::Subject, requests::NewSubject, responses::SubjectListResponse},
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_subject_impl(&self, subject: NewSubject) -> Result<Subject> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            subject_name: Set(subject.subject_name),
            grade_level: Set(subject.grade_level),
            strand: Set(subject.strand),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建科目失败", e))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_impl(&self, subject_id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn list_subjects_with_pagination_impl(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<SubjectListResponse> {
        let (page, size) = PaginationQuery::normalized(page, size);

        let paginator = Subjects::find()
            .order_by_asc(Column::GradeLevel)
            .order_by_asc(Column::SubjectName)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询科目总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询科目页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(SubjectListResponse {
            items: items.into_iter().map(|m| m.into_subject()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_subject_impl(
        &self,
        subject_id: i64,
        subject: NewSubject,
    ) -> Result<Option<Subject>> {
        if self.get_subject_impl(subject_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            subject_id: Set(subject_id),
            subject_name: Set(subject.subject_name),
            grade_level: Set(subject.grade_level),
            strand: Set(subject.strand),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新科目失败", e))?;

        Ok(Some(result.into_subject()))
    }

    pub async fn delete_subject_impl(&self, subject_id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(subject_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除科目失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
