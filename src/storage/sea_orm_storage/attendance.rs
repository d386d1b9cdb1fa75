//! 考勤存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::attendance::{ActiveModel, Column, Entity as AttendanceEntity};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    attendance::{
        entities::Attendance, requests::NewAttendance, responses::AttendanceListResponse,
    },
    grades::requests::ClassRecordQuery,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_attendance_impl(&self, attendance: NewAttendance) -> Result<Attendance> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            lrn: Set(attendance.lrn),
            class_id: Set(attendance.class_id),
            date: Set(attendance.date),
            status: Set(attendance.status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建考勤失败", e))?;

        Ok(result.into_attendance())
    }

    pub async fn get_attendance_impl(&self, attendance_id: i64) -> Result<Option<Attendance>> {
        let result = AttendanceEntity::find_by_id(attendance_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance()))
    }

    pub async fn list_attendance_with_pagination_impl(
        &self,
        query: ClassRecordQuery,
    ) -> Result<AttendanceListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = AttendanceEntity::find();
        if let Some(ref lrn) = query.lrn {
            select = select.filter(Column::Lrn.eq(lrn.as_str()));
        }
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        let paginator = select
            .order_by_desc(Column::Date)
            .order_by_desc(Column::AttendanceId)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询考勤总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询考勤页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(AttendanceListResponse {
            items: items.into_iter().map(|m| m.into_attendance()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_attendance_impl(
        &self,
        attendance_id: i64,
        attendance: NewAttendance,
    ) -> Result<Option<Attendance>> {
        if self.get_attendance_impl(attendance_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            attendance_id: Set(attendance_id),
            lrn: Set(attendance.lrn),
            class_id: Set(attendance.class_id),
            date: Set(attendance.date),
            status: Set(attendance.status),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新考勤失败", e))?;

        Ok(Some(result.into_attendance()))
    }

    pub async fn delete_attendance_impl(&self, attendance_id: i64) -> Result<bool> {
        let result = AttendanceEntity::delete_by_id(attendance_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除考勤失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
