//! 会话参与方查询
//!
//! 学生与管理员分表存储，编号不重叠。查询顺序固定为先学生后管理员。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::admins::{Column as AdminColumn, Entity as Admins};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{PortalError, Result};
use crate::models::parties::entities::Party;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    pub async fn find_party_impl(&self, id: &str) -> Result<Option<Party>> {
        if let Some(student) = Students::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?
        {
            return Ok(Some(student.into_student().as_party()));
        }

        let admin = Admins::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(admin.map(|m| m.into_admin().as_party()))
    }

    pub async fn find_parties_impl(&self, ids: &[String]) -> Result<HashMap<String, Party>> {
        let mut parties = HashMap::new();
        if ids.is_empty() {
            return Ok(parties);
        }

        let students = Students::find()
            .filter(StudentColumn::Lrn.is_in(ids.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("批量查询学生失败: {e}")))?;
        for student in students {
            let party = student.into_student().as_party();
            parties.insert(party.id.clone(), party);
        }

        let remaining: Vec<String> = ids
            .iter()
            .filter(|id| !parties.contains_key(*id))
            .cloned()
            .collect();
        if remaining.is_empty() {
            return Ok(parties);
        }

        let admins = Admins::find()
            .filter(AdminColumn::AdminId.is_in(remaining))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("批量查询管理员失败: {e}")))?;
        for admin in admins {
            let party = admin.into_admin().as_party();
            parties.insert(party.id.clone(), party);
        }

        Ok(parties)
    }

    pub async fn list_parties_impl(&self) -> Result<Vec<Party>> {
        let students = Students::find()
            .order_by_asc(StudentColumn::Lname)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生列表失败: {e}")))?;
        let admins = Admins::find()
            .order_by_asc(AdminColumn::Lname)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询管理员列表失败: {e}")))?;

        Ok(students
            .into_iter()
            .map(|m| m.into_student().as_party())
            .chain(admins.into_iter().map(|m| m.into_admin().as_party()))
            .collect())
    }
}
