//! 成绩存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    grades::{
        entities::Grade,
        requests::{ClassRecordQuery, NewGrade},
        responses::GradeListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_grade_impl(&self, grade: NewGrade) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            lrn: Set(grade.lrn),
            class_id: Set(grade.class_id),
            grade: Set(grade.grade),
            term: Set(grade.term),
            semester: Set(grade.semester),
            permission: Set(grade.permission),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建成绩失败", e))?;

        Ok(result.into_grade())
    }

    pub async fn get_grade_impl(&self, grade_id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(grade_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    pub async fn list_grades_with_pagination_impl(
        &self,
        query: ClassRecordQuery,
    ) -> Result<GradeListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Grades::find();
        if let Some(ref lrn) = query.lrn {
            select = select.filter(Column::Lrn.eq(lrn.as_str()));
        }
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let paginator = select
            .order_by_asc(Column::ClassId)
            .order_by_asc(Column::GradeId)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(GradeListResponse {
            items: items.into_iter().map(|m| m.into_grade()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_grade_impl(&self, grade_id: i64, grade: NewGrade) -> Result<Option<Grade>> {
        if self.get_grade_impl(grade_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            grade_id: Set(grade_id),
            lrn: Set(grade.lrn),
            class_id: Set(grade.class_id),
            grade: Set(grade.grade),
            term: Set(grade.term),
            semester: Set(grade.semester),
            permission: Set(grade.permission),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新成绩失败", e))?;

        Ok(Some(result.into_grade()))
    }

    pub async fn delete_grade_impl(&self, grade_id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(grade_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除成绩失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
