//! 学生存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    students::{
        entities::Student,
        requests::{NewStudent, StudentChanges, StudentListQuery},
        responses::{BulkUpsertResponse, StudentListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 在给定连接（或事务）上插入学生
    pub(crate) async fn insert_student<C: ConnectionTrait>(
        conn: &C,
        student: NewStudent,
        now: i64,
    ) -> Result<Student> {
        let model = ActiveModel {
            lrn: Set(student.lrn),
            fname: Set(student.fname),
            mname: Set(student.mname),
            lname: Set(student.lname),
            suffix: Set(student.suffix),
            bdate: Set(student.bdate),
            bplace: Set(student.bplace),
            gender: Set(student.gender),
            religion: Set(student.religion),
            address: Set(student.address),
            contact_no: Set(student.contact_no),
            email: Set(student.email),
            password_hash: Set(student.password_hash),
            student_pic: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(conn)
            .await
            .map_err(|e| write_error("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 创建学生
    pub async fn create_student_impl(&self, student: NewStudent) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();
        Self::insert_student(&self.db, student, now).await
    }

    /// 通过 LRN 获取学生
    pub async fn get_student_impl(&self, lrn: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(lrn.to_string())
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过邮箱获取学生
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Lrn.contains(&escaped))
                    .add(Column::Fname.contains(&escaped))
                    .add(Column::Lname.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        select = select
            .order_by_asc(Column::Lname)
            .order_by_asc(Column::Fname);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生页数失败: {e}")))?;
        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        lrn: &str,
        changes: StudentChanges,
    ) -> Result<Option<Student>> {
        if self.get_student_impl(lrn).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            lrn: Set(lrn.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(fname) = changes.fname {
            model.fname = Set(fname);
        }
        if let Some(mname) = changes.mname {
            model.mname = Set(Some(mname));
        }
        if let Some(lname) = changes.lname {
            model.lname = Set(lname);
        }
        if let Some(suffix) = changes.suffix {
            model.suffix = Set(Some(suffix));
        }
        if let Some(bdate) = changes.bdate {
            model.bdate = Set(Some(bdate));
        }
        if let Some(bplace) = changes.bplace {
            model.bplace = Set(Some(bplace));
        }
        if let Some(gender) = changes.gender {
            model.gender = Set(Some(gender));
        }
        if let Some(religion) = changes.religion {
            model.religion = Set(Some(religion));
        }
        if let Some(address) = changes.address {
            model.address = Set(Some(address));
        }
        if let Some(contact_no) = changes.contact_no {
            model.contact_no = Set(Some(contact_no));
        }
        if let Some(email) = changes.email {
            model.email = Set(email);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新学生失败", e))?;

        self.get_student_impl(lrn).await
    }

    /// 更新学生密码
    pub async fn update_student_password_impl(
        &self,
        lrn: &str,
        password_hash: &str,
    ) -> Result<bool> {
        let result = Students::update_many()
            .col_expr(
                Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Lrn.eq(lrn))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新学生密码失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新学生头像
    pub async fn update_student_pic_impl(&self, lrn: &str, path: &str) -> Result<bool> {
        let result = Students::update_many()
            .col_expr(Column::StudentPic, sea_orm::sea_query::Expr::value(path))
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Lrn.eq(lrn))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新学生头像失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, lrn: &str) -> Result<bool> {
        let result = Students::delete_by_id(lrn.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除学生失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量导入学生：已存在的 LRN 更新资料（不修改密码），否则新建
    pub async fn upsert_students_impl(
        &self,
        students: Vec<NewStudent>,
    ) -> Result<BulkUpsertResponse> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        let mut summary = BulkUpsertResponse::default();
        for student in students {
            let existing = Students::find_by_id(student.lrn.clone())
                .one(&txn)
                .await
                .map_err(|e| PortalError::database_operation(format!("查询学生失败: {e}")))?;

            if existing.is_some() {
                let model = ActiveModel {
                    lrn: Set(student.lrn),
                    fname: Set(student.fname),
                    mname: Set(student.mname),
                    lname: Set(student.lname),
                    suffix: Set(student.suffix),
                    bdate: Set(student.bdate),
                    bplace: Set(student.bplace),
                    gender: Set(student.gender),
                    religion: Set(student.religion),
                    address: Set(student.address),
                    contact_no: Set(student.contact_no),
                    email: Set(student.email),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&txn)
                    .await
                    .map_err(|e| write_error("更新学生失败", e))?;
                summary.updated += 1;
            } else {
                Self::insert_student(&txn, student, now).await?;
                summary.created += 1;
            }
        }

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(summary)
    }
}
