//! 管理员存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::admins::{ActiveModel, Column, Entity as Admins};
use crate::errors::{PortalError, Result};
use crate::models::admins::{entities::Admin, requests::NewAdmin};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建管理员
    pub async fn create_admin_impl(&self, admin: NewAdmin) -> Result<Admin> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            admin_id: Set(admin.admin_id),
            fname: Set(admin.fname),
            mname: Set(admin.mname),
            lname: Set(admin.lname),
            email: Set(admin.email),
            password_hash: Set(admin.password_hash),
            admin_pic: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| write_error("创建管理员失败", e))?;

        Ok(result.into_admin())
    }

    pub async fn get_admin_impl(&self, admin_id: &str) -> Result<Option<Admin>> {
        let result = Admins::find_by_id(admin_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    pub async fn get_admin_by_email_impl(&self, email: &str) -> Result<Option<Admin>> {
        let result = Admins::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    pub async fn list_admins_impl(&self) -> Result<Vec<Admin>> {
        let admins = Admins::find()
            .order_by_asc(Column::Lname)
            .order_by_asc(Column::Fname)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询管理员列表失败: {e}")))?;

        Ok(admins.into_iter().map(|m| m.into_admin()).collect())
    }

    /// 统计管理员数量
    pub async fn count_admins_impl(&self) -> Result<u64> {
        Admins::find()
            .count(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("统计管理员数量失败: {e}")))
    }
}
