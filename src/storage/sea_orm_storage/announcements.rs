//! 公告存储操作

use std::collections::HashMap;

use super::{SeaOrmStorage, write_error};
use crate::entity::admins::{Column as AdminColumn, Entity as Admins};
use crate::entity::announcements::{ActiveModel, Column, Entity as Announcements, Model};
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::sections::{Column as SectionColumn, Entity as Sections};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    announcements::{
        entities::{Announcement, AnnouncementDetail},
        requests::NewAnnouncement,
        responses::AnnouncementListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    pub async fn create_announcement_impl(
        &self,
        announcement: NewAnnouncement,
    ) -> Result<Announcement> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            admin_id: Set(announcement.admin_id),
            class_id: Set(announcement.class_id),
            title: Set(announcement.title),
            announcement: Set(announcement.announcement),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建公告失败", e))?;

        Ok(result.into_announcement())
    }

    pub async fn get_announcement_impl(&self, ancmnt_id: i64) -> Result<Option<Announcement>> {
        let result = Announcements::find_by_id(ancmnt_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(result.map(|m| m.into_announcement()))
    }

    pub async fn list_announcements_with_pagination_impl(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<AnnouncementListResponse> {
        let (page, size) = PaginationQuery::normalized(page, size);

        let paginator = Announcements::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::AncmntId)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告列表失败: {e}")))?;

        Ok(AnnouncementListResponse {
            items: self.attach_announcement_details(items).await?,
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 最近的公告（不区分接收人）
    pub async fn list_recent_announcements_impl(&self, limit: u64) -> Result<Vec<Announcement>> {
        let items = Announcements::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::AncmntId)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询最近公告失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_announcement()).collect())
    }

    pub async fn update_announcement_impl(
        &self,
        ancmnt_id: i64,
        announcement: NewAnnouncement,
    ) -> Result<Option<Announcement>> {
        if self.get_announcement_impl(ancmnt_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            ancmnt_id: Set(ancmnt_id),
            admin_id: Set(announcement.admin_id),
            class_id: Set(announcement.class_id),
            title: Set(announcement.title),
            announcement: Set(announcement.announcement),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新公告失败", e))?;

        Ok(Some(result.into_announcement()))
    }

    pub async fn delete_announcement_impl(&self, ancmnt_id: i64) -> Result<bool> {
        let result = Announcements::delete_by_id(ancmnt_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除公告失败", e))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_announcement_detail_impl(
        &self,
        ancmnt_id: i64,
    ) -> Result<Option<AnnouncementDetail>> {
        let Some(model) = Announcements::find_by_id(ancmnt_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告失败: {e}")))?
        else {
            return Ok(None);
        };

        Ok(self.attach_announcement_details(vec![model]).await?.pop())
    }

    /// 批量补齐发布人、科目与年级，关联缺失时对应字段为空
    async fn attach_announcement_details(
        &self,
        models: Vec<Model>,
    ) -> Result<Vec<AnnouncementDetail>> {
        let admin_ids: Vec<String> = models.iter().map(|m| m.admin_id.clone()).collect();
        let class_ids: Vec<i64> = models.iter().filter_map(|m| m.class_id).collect();

        let admin_names: HashMap<String, String> = if admin_ids.is_empty() {
            HashMap::new()
        } else {
            Admins::find()
                .filter(AdminColumn::AdminId.is_in(admin_ids))
                .all(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("批量查询管理员失败: {e}")))?
                .into_iter()
                .map(|a| (a.admin_id, format!("{} {}", a.fname, a.lname)))
                .collect()
        };

        let classes: HashMap<i64, (i64, i64)> = if class_ids.is_empty() {
            HashMap::new()
        } else {
            Classes::find()
                .filter(ClassColumn::ClassId.is_in(class_ids))
                .all(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("批量查询课程班失败: {e}")))?
                .into_iter()
                .map(|c| (c.class_id, (c.subject_id, c.section_id)))
                .collect()
        };

        let subject_ids: Vec<i64> = classes.values().map(|(subject, _)| *subject).collect();
        let section_ids: Vec<i64> = classes.values().map(|(_, section)| *section).collect();

        let subject_names: HashMap<i64, String> = if subject_ids.is_empty() {
            HashMap::new()
        } else {
            Subjects::find()
                .filter(SubjectColumn::SubjectId.is_in(subject_ids))
                .all(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("批量查询科目失败: {e}")))?
                .into_iter()
                .map(|s| (s.subject_id, s.subject_name))
                .collect()
        };

        let grade_levels: HashMap<i64, String> = if section_ids.is_empty() {
            HashMap::new()
        } else {
            Sections::find()
                .filter(SectionColumn::SectionId.is_in(section_ids))
                .all(&self.db)
                .await
                .map_err(|e| PortalError::database_operation(format!("批量查询分组失败: {e}")))?
                .into_iter()
                .map(|s| (s.section_id, s.grade_level))
                .collect()
        };

        Ok(models
            .into_iter()
            .map(|m| {
                let admin_name = admin_names.get(&m.admin_id).cloned();
                let class = m.class_id.and_then(|id| classes.get(&id)).copied();
                let subject_name = class.and_then(|(subject, _)| subject_names.get(&subject).cloned());
                let grade_level = class.and_then(|(_, section)| grade_levels.get(&section).cloned());
                AnnouncementDetail {
                    announcement: m.into_announcement(),
                    admin_name,
                    subject_name,
                    grade_level,
                }
            })
            .collect())
    }
}
