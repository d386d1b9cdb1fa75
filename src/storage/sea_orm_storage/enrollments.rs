//! 入学登记存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    enrollments::{
        entities::Enrollment,
        requests::{EnrollmentChanges, EnrollmentListQuery, NewEnrollment},
        responses::EnrollmentListResponse,
    },
    students::{entities::Student, requests::NewStudent},
};
use crate::storage::EnrollmentStamp;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    async fn insert_enrollment<C: ConnectionTrait>(
        conn: &C,
        enrollment: NewEnrollment,
        now: i64,
    ) -> Result<Enrollment> {
        let model = ActiveModel {
            lrn: Set(enrollment.lrn),
            grade_level: Set(enrollment.grade_level),
            guardian_name: Set(enrollment.guardian_name),
            guardian_no: Set(enrollment.guardian_no),
            last_attended: Set(enrollment.last_attended),
            public_private: Set(enrollment.public_private),
            strand: Set(enrollment.strand),
            school_year: Set(enrollment.school_year),
            date_register: Set(Some(enrollment.date_register.timestamp())),
            regapproval_date: Set(None),
            payment_approval: Set(None),
            section_id: Set(None),
            old_account: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(conn)
            .await
            .map_err(|e| write_error("创建入学记录失败", e))?;

        Ok(result.into_enrollment())
    }

    /// 按 (LRN, 学年) 新增或更新
    pub async fn upsert_enrollment_impl(
        &self,
        enrollment: NewEnrollment,
    ) -> Result<(Enrollment, bool)> {
        let now = chrono::Utc::now().timestamp();

        let existing = Enrollments::find()
            .filter(Column::Lrn.eq(enrollment.lrn.as_str()))
            .filter(Column::SchoolYear.eq(enrollment.school_year.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询入学记录失败: {e}")))?;

        let Some(existing) = existing else {
            let created = Self::insert_enrollment(&self.db, enrollment, now).await?;
            return Ok((created, true));
        };

        let model = ActiveModel {
            enrol_id: Set(existing.enrol_id),
            grade_level: Set(enrollment.grade_level),
            guardian_name: Set(enrollment.guardian_name),
            guardian_no: Set(enrollment.guardian_no),
            last_attended: Set(enrollment.last_attended),
            public_private: Set(enrollment.public_private),
            strand: Set(enrollment.strand),
            date_register: Set(Some(enrollment.date_register.timestamp())),
            updated_at: Set(now),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新入学记录失败", e))?;

        Ok((updated.into_enrollment(), false))
    }

    /// 新生注册（事务）
    pub async fn sign_up_impl(
        &self,
        student: NewStudent,
        enrollment: NewEnrollment,
    ) -> Result<(Student, Enrollment)> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))?;

        // 任一步失败时 txn 被丢弃即回滚
        let student = Self::insert_student(&txn, student, now).await?;
        let enrollment = Self::insert_enrollment(&txn, enrollment, now).await?;

        txn.commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((student, enrollment))
    }

    /// 最近一个学年的入学记录
    pub async fn get_latest_enrollment_impl(&self, lrn: &str) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::Lrn.eq(lrn))
            .order_by_desc(Column::SchoolYear)
            .order_by_desc(Column::EnrolId)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询入学记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        let (page, size) = PaginationQuery::normalized(query.page, query.size);

        let mut select = Enrollments::find();
        if let Some(ref school_year) = query.school_year {
            select = select.filter(Column::SchoolYear.eq(school_year.as_str()));
        }
        if let Some(ref grade_level) = query.grade_level {
            select = select.filter(Column::GradeLevel.eq(grade_level.as_str()));
        }
        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::EnrolId);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询入学记录总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询入学记录页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询入学记录列表失败: {e}")))?;

        Ok(EnrollmentListResponse {
            items: items.into_iter().map(|m| m.into_enrollment()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    async fn get_enrollment_impl(&self, enrol_id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(enrol_id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询入学记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    pub async fn update_enrollment_impl(
        &self,
        enrol_id: i64,
        changes: EnrollmentChanges,
    ) -> Result<Option<Enrollment>> {
        if self.get_enrollment_impl(enrol_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            enrol_id: Set(enrol_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(grade_level) = changes.grade_level {
            model.grade_level = Set(grade_level);
        }
        if let Some(guardian_name) = changes.guardian_name {
            model.guardian_name = Set(guardian_name);
        }
        if let Some(guardian_no) = changes.guardian_no {
            model.guardian_no = Set(Some(guardian_no));
        }
        if let Some(last_attended) = changes.last_attended {
            model.last_attended = Set(last_attended);
        }
        if let Some(public_private) = changes.public_private {
            model.public_private = Set(public_private);
        }
        if let Some(strand) = changes.strand {
            model.strand = Set(Some(strand));
        }
        if let Some(school_year) = changes.school_year {
            model.school_year = Set(school_year);
        }
        if let Some(section_id) = changes.section_id {
            model.section_id = Set(Some(section_id));
        }
        if let Some(old_account) = changes.old_account {
            model.old_account = Set(Some(old_account));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| write_error("更新入学记录失败", e))?;

        self.get_enrollment_impl(enrol_id).await
    }

    /// 写入审核时间
    pub async fn stamp_enrollment_impl(
        &self,
        enrol_id: i64,
        stamp: EnrollmentStamp,
        at: i64,
    ) -> Result<Option<Enrollment>> {
        let column = match stamp {
            EnrollmentStamp::Registration => Column::RegapprovalDate,
            EnrollmentStamp::Payment => Column::PaymentApproval,
        };

        Enrollments::update_many()
            .col_expr(column, sea_orm::sea_query::Expr::value(at))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(at))
            .filter(Column::EnrolId.eq(enrol_id))
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新审核状态失败: {e}")))?;

        self.get_enrollment_impl(enrol_id).await
    }

    pub async fn delete_enrollment_impl(&self, enrol_id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(enrol_id)
            .exec(&self.db)
            .await
            .map_err(|e| write_error("删除入学记录失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 已审核缴费的入学记录，按审核时间倒序
    pub async fn list_payment_approvals_impl(
        &self,
        lrn: &str,
        limit: u64,
    ) -> Result<Vec<Enrollment>> {
        let items = Enrollments::find()
            .filter(Column::Lrn.eq(lrn))
            .filter(Column::PaymentApproval.is_not_null())
            .order_by_desc(Column::PaymentApproval)
            .order_by_desc(Column::EnrolId)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询缴费审核记录失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_enrollment()).collect())
    }
}
