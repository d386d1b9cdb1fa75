//! 课程班存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, write_error};
use crate::entity::admins::{Column as AdminColumn, Entity as Admins};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::sections::{Column as SectionColumn, Entity as Sections};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    classes::{
        entities::{Class, ClassDetail},
        requests::NewClass,
        responses::ClassListResponse,
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_class_impl(&self, class: NewClass) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            admin_id: Set(class.admin_id),
            subject_id: Set(class.subject_id),
            section_id: Set(class.section_id),
            room: Set(class.room),
            schedule: Set(class.schedule),
            time: Set(class.time),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建课程班失败", e))?;

        Ok(result.into_class())
    }

    pub async fn get_class_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程班失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    pub async fn list_classes_with_pagination_impl(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<ClassListResponse> {
        let (page, size) = PaginationQuery::normalized(page, size);

        let paginator = Classes::find()
            .order_by_asc(Column::ClassId)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程班总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程班页数失败: {e}")))?;
        let classes: Vec<Class> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程班列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_class())
            .collect();

        // 批量补齐科目、分组与教师姓名
        let subject_ids: Vec<i64> = classes.iter().map(|c| c.subject_id).collect();
        let section_ids: Vec<i64> = classes.iter().map(|c| c.section_id).collect();
        let admin_ids: Vec<String> = classes.iter().map(|c| c.admin_id.clone()).collect();

        let mut subject_names = HashMap::new();
        let mut section_names = HashMap::new();
        let mut admin_names = HashMap::new();

        if !classes.is_empty() {
            for s in Subjects::find()
                .filter(SubjectColumn::SubjectId.is_in(subject_ids))
                .all(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("批量查询科目失败: {e}")))?
            {
                subject_names.insert(s.subject_id, s.subject_name);
            }
            for s in Sections::find()
                .filter(SectionColumn::SectionId.is_in(section_ids))
                .all(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("批量查询分组失败: {e}")))?
            {
                section_names.insert(s.section_id, s.section_name);
            }
            for a in Admins::find()
                .filter(AdminColumn::AdminId.is_in(admin_ids))
                .all(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("批量查询管理员失败: {e}")))?
            {
                admin_names.insert(a.admin_id, format!("{} {}", a.fname, a.lname));
            }
        }

        let items = classes
            .into_iter()
            .map(|class| ClassDetail {
                subject_name: subject_names.get(&class.subject_id).cloned(),
                section_name: section_names.get(&class.section_id).cloned(),
                admin_name: admin_names.get(&class.admin_id).cloned(),
                class,
            })
            .collect();

        Ok(ClassListResponse {
            items,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_class_impl(&self, class_id: i64, class: NewClass) -> Result<Option<Class>> {
        if self.get_class_impl(class_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            class_id: Set(class_id),
            admin_id: Set(class.admin_id),
            subject_id: Set(class.subject_id),
            section_id: Set(class.section_id),
            room: Set(class.room),
            schedule: Set(class.schedule),
            time: Set(class.time),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新课程班失败", e))?;

        Ok(Some(result.into_class()))
    }

    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除课程班失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
