//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod admins;
mod announcements;
mod attendance;
mod classes;
mod enrollments;
mod financial_statements;
mod grades;
mod messages;
mod parties;
mod payments;
mod reports;
mod rosters;
mod sections;
mod students;
mod subjects;
mod tuition_fees;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 使用已有连接构建（测试与工具使用）
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 写操作错误转换：唯一约束与外键约束冲突映射为 Conflict
pub(crate) fn write_error(context: &str, e: DbErr) -> PortalError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            PortalError::conflict(format!("{context}: 记录已存在 ({detail})"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            PortalError::conflict(format!("{context}: 存在关联记录 ({detail})"))
        }
        _ => PortalError::database_operation(format!("{context}: {e}")),
    }
}

// Storage trait 实现
use std::collections::HashMap;

use crate::models::{
    admins::{entities::Admin, requests::NewAdmin},
    announcements::{
        entities::{Announcement, AnnouncementDetail},
        requests::NewAnnouncement,
        responses::AnnouncementListResponse,
    },
    attendance::{
        entities::Attendance, requests::NewAttendance, responses::AttendanceListResponse,
    },
    classes::{entities::Class, requests::NewClass, responses::ClassListResponse},
    enrollments::{
        entities::Enrollment,
        requests::{EnrollmentChanges, EnrollmentListQuery, NewEnrollment},
        responses::EnrollmentListResponse,
    },
    financial_statements::{
        entities::FinancialStatement, requests::NewFinancialStatement,
        responses::FinancialStatementListResponse,
    },
    grades::{
        entities::Grade,
        requests::{ClassRecordQuery, NewGrade},
        responses::GradeListResponse,
    },
    messages::{entities::Message, requests::NewMessage},
    parties::entities::Party,
    payments::{
        entities::Payment,
        requests::{NewPayment, PaymentListQuery},
        responses::PaymentListResponse,
    },
    reports::entities::{AttendanceRecord, ClassScheduleRow, StudentReportRow},
    rosters::{entities::Roster, requests::NewRoster, responses::RosterListResponse},
    sections::{entities::Section, requests::NewSection, responses::SectionListResponse},
    students::{
        entities::Student,
        requests::{NewStudent, StudentChanges, StudentListQuery},
        responses::{BulkUpsertResponse, StudentListResponse},
    },
    subjects::{entities::Subject, requests::NewSubject, responses::SubjectListResponse},
    tuition_fees::{
        entities::TuitionFee, requests::NewTuitionFee, responses::TuitionFeeListResponse,
    },
};
use crate::storage::{EnrollmentStamp, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生管理方法
    async fn create_student(&self, student: NewStudent) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student(&self, lrn: &str) -> Result<Option<Student>> {
        self.get_student_impl(lrn).await
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        self.get_student_by_email_impl(email).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(&self, lrn: &str, changes: StudentChanges) -> Result<Option<Student>> {
        self.update_student_impl(lrn, changes).await
    }

    async fn update_student_password(&self, lrn: &str, password_hash: &str) -> Result<bool> {
        self.update_student_password_impl(lrn, password_hash).await
    }

    async fn update_student_pic(&self, lrn: &str, path: &str) -> Result<bool> {
        self.update_student_pic_impl(lrn, path).await
    }

    async fn delete_student(&self, lrn: &str) -> Result<bool> {
        self.delete_student_impl(lrn).await
    }

    async fn upsert_students(&self, students: Vec<NewStudent>) -> Result<BulkUpsertResponse> {
        self.upsert_students_impl(students).await
    }


    // 管理员管理方法
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin> {
        self.create_admin_impl(admin).await
    }

    async fn get_admin(&self, admin_id: &str) -> Result<Option<Admin>> {
        self.get_admin_impl(admin_id).await
    }

    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        self.get_admin_by_email_impl(email).await
    }

    async fn list_admins(&self) -> Result<Vec<Admin>> {
        self.list_admins_impl().await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }


    // 会话参与方查询（先查学生表，再查管理员表）
    async fn find_party(&self, id: &str) -> Result<Option<Party>> {
        self.find_party_impl(id).await
    }

    async fn find_parties(&self, ids: &[String]) -> Result<HashMap<String, Party>> {
        self.find_parties_impl(ids).await
    }

    async fn list_parties(&self) -> Result<Vec<Party>> {
        self.list_parties_impl().await
    }


    // 消息方法
    async fn create_message(&self, message: NewMessage) -> Result<Message> {
        self.create_message_impl(message).await
    }

    async fn list_conversation(&self, party_a: &str, party_b: &str) -> Result<Vec<Message>> {
        self.list_conversation_impl(party_a, party_b).await
    }

    async fn list_inbox(&self, receiver: &str, limit: Option<u64>) -> Result<Vec<Message>> {
        self.list_inbox_impl(receiver, limit).await
    }

    async fn mark_message_read(&self, message_id: i64, read_at: i64) -> Result<Option<Message>> {
        self.mark_message_read_impl(message_id, read_at).await
    }


    // 入学管理方法
    async fn upsert_enrollment(&self, enrollment: NewEnrollment) -> Result<(Enrollment, bool)> {
        self.upsert_enrollment_impl(enrollment).await
    }

    async fn sign_up(
        &self,
        student: NewStudent,
        enrollment: NewEnrollment,
    ) -> Result<(Student, Enrollment)> {
        self.sign_up_impl(student, enrollment).await
    }

    async fn get_latest_enrollment(&self, lrn: &str) -> Result<Option<Enrollment>> {
        self.get_latest_enrollment_impl(lrn).await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn update_enrollment(
        &self,
        enrol_id: i64,
        changes: EnrollmentChanges,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_impl(enrol_id, changes).await
    }

    async fn stamp_enrollment(
        &self,
        enrol_id: i64,
        stamp: EnrollmentStamp,
        at: i64,
    ) -> Result<Option<Enrollment>> {
        self.stamp_enrollment_impl(enrol_id, stamp, at).await
    }

    async fn delete_enrollment(&self, enrol_id: i64) -> Result<bool> {
        self.delete_enrollment_impl(enrol_id).await
    }

    async fn list_payment_approvals(&self, lrn: &str, limit: u64) -> Result<Vec<Enrollment>> {
        self.list_payment_approvals_impl(lrn, limit).await
    }


    // 缴费方法
    async fn create_payment(&self, payment: NewPayment) -> Result<Payment> {
        self.create_payment_impl(payment).await
    }

    async fn or_number_exists(&self, or_number: &str) -> Result<bool> {
        self.or_number_exists_impl(or_number).await
    }

    async fn get_payment(&self, payment_id: i64) -> Result<Option<Payment>> {
        self.get_payment_impl(payment_id).await
    }

    async fn list_payments_with_pagination(
        &self,
        query: PaymentListQuery,
    ) -> Result<PaymentListResponse> {
        self.list_payments_with_pagination_impl(query).await
    }

    async fn list_student_payments(&self, lrn: &str) -> Result<Vec<Payment>> {
        self.list_student_payments_impl(lrn).await
    }


    // 公告方法
    async fn create_announcement(&self, announcement: NewAnnouncement) -> Result<Announcement> {
        self.create_announcement_impl(announcement).await
    }

    async fn get_announcement(&self, ancmnt_id: i64) -> Result<Option<Announcement>> {
        self.get_announcement_impl(ancmnt_id).await
    }

    async fn list_announcements_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<AnnouncementListResponse> {
        self.list_announcements_with_pagination_impl(page, size).await
    }

    async fn list_recent_announcements(&self, limit: u64) -> Result<Vec<Announcement>> {
        self.list_recent_announcements_impl(limit).await
    }

    async fn update_announcement(
        &self,
        ancmnt_id: i64,
        announcement: NewAnnouncement,
    ) -> Result<Option<Announcement>> {
        self.update_announcement_impl(ancmnt_id, announcement).await
    }

    async fn delete_announcement(&self, ancmnt_id: i64) -> Result<bool> {
        self.delete_announcement_impl(ancmnt_id).await
    }

    async fn get_announcement_detail(&self, ancmnt_id: i64) -> Result<Option<AnnouncementDetail>> {
        self.get_announcement_detail_impl(ancmnt_id).await
    }


    // 成绩方法
    async fn create_grade(&self, grade: NewGrade) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn get_grade(&self, grade_id: i64) -> Result<Option<Grade>> {
        self.get_grade_impl(grade_id).await
    }

    async fn list_grades_with_pagination(
        &self,
        query: ClassRecordQuery,
    ) -> Result<GradeListResponse> {
        self.list_grades_with_pagination_impl(query).await
    }

    async fn update_grade(&self, grade_id: i64, grade: NewGrade) -> Result<Option<Grade>> {
        self.update_grade_impl(grade_id, grade).await
    }

    async fn delete_grade(&self, grade_id: i64) -> Result<bool> {
        self.delete_grade_impl(grade_id).await
    }


    // 考勤方法
    async fn create_attendance(&self, attendance: NewAttendance) -> Result<Attendance> {
        self.create_attendance_impl(attendance).await
    }

    async fn get_attendance(&self, attendance_id: i64) -> Result<Option<Attendance>> {
        self.get_attendance_impl(attendance_id).await
    }

    async fn list_attendance_with_pagination(
        &self,
        query: ClassRecordQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_attendance_with_pagination_impl(query).await
    }

    async fn update_attendance(
        &self,
        attendance_id: i64,
        attendance: NewAttendance,
    ) -> Result<Option<Attendance>> {
        self.update_attendance_impl(attendance_id, attendance).await
    }

    async fn delete_attendance(&self, attendance_id: i64) -> Result<bool> {
        self.delete_attendance_impl(attendance_id).await
    }


    // 分组方法
    async fn create_section(&self, section: NewSection) -> Result<Section> {
        self.create_section_impl(section).await
    }

    async fn get_section(&self, section_id: i64) -> Result<Option<Section>> {
        self.get_section_impl(section_id).await
    }

    async fn list_sections_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<SectionListResponse> {
        self.list_sections_with_pagination_impl(page, size).await
    }

    async fn update_section(
        &self,
        section_id: i64,
        section: NewSection,
    ) -> Result<Option<Section>> {
        self.update_section_impl(section_id, section).await
    }

    async fn delete_section(&self, section_id: i64) -> Result<bool> {
        self.delete_section_impl(section_id).await
    }


    // 科目方法
    async fn create_subject(&self, subject: NewSubject) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_impl(subject_id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(page, size).await
    }

    async fn update_subject(
        &self,
        subject_id: i64,
        subject: NewSubject,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(subject_id, subject).await
    }

    async fn delete_subject(&self, subject_id: i64) -> Result<bool> {
        self.delete_subject_impl(subject_id).await
    }


    // 课程班方法
    async fn create_class(&self, class: NewClass) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_impl(class_id).await
    }

    async fn list_classes_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(page, size).await
    }

    async fn update_class(&self, class_id: i64, class: NewClass) -> Result<Option<Class>> {
        self.update_class_impl(class_id, class).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }


    // 花名册方法
    async fn create_roster(&self, roster: NewRoster) -> Result<Roster> {
        self.create_roster_impl(roster).await
    }

    async fn get_roster(&self, roster_id: i64) -> Result<Option<Roster>> {
        self.get_roster_impl(roster_id).await
    }

    async fn list_rosters_with_pagination(
        &self,
        query: ClassRecordQuery,
    ) -> Result<RosterListResponse> {
        self.list_rosters_with_pagination_impl(query).await
    }

    async fn delete_roster(&self, roster_id: i64) -> Result<bool> {
        self.delete_roster_impl(roster_id).await
    }


    // 学费标准方法
    async fn create_tuition_fee(&self, fee: NewTuitionFee) -> Result<TuitionFee> {
        self.create_tuition_fee_impl(fee).await
    }

    async fn get_tuition_fee(&self, fee_id: i64) -> Result<Option<TuitionFee>> {
        self.get_tuition_fee_impl(fee_id).await
    }

    async fn get_tuition_fee_by_grade(&self, grade_level: &str) -> Result<Option<TuitionFee>> {
        self.get_tuition_fee_by_grade_impl(grade_level).await
    }

    async fn list_tuition_fees_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<TuitionFeeListResponse> {
        self.list_tuition_fees_with_pagination_impl(page, size).await
    }

    async fn update_tuition_fee(
        &self,
        fee_id: i64,
        fee: NewTuitionFee,
    ) -> Result<Option<TuitionFee>> {
        self.update_tuition_fee_impl(fee_id, fee).await
    }

    async fn delete_tuition_fee(&self, fee_id: i64) -> Result<bool> {
        self.delete_tuition_fee_impl(fee_id).await
    }


    // 对账单方法
    async fn create_financial_statement(
        &self,
        statement: NewFinancialStatement,
        uploaded_at: i64,
    ) -> Result<FinancialStatement> {
        self.create_financial_statement_impl(statement, uploaded_at).await
    }

    async fn get_financial_statement(&self, soa_id: i64) -> Result<Option<FinancialStatement>> {
        self.get_financial_statement_impl(soa_id).await
    }

    async fn list_financial_statements_with_pagination(
        &self,
        lrn: Option<String>,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<FinancialStatementListResponse> {
        self.list_financial_statements_with_pagination_impl(lrn, page, size).await
    }

    async fn list_student_financial_statements(
        &self,
        lrn: &str,
    ) -> Result<Vec<FinancialStatement>> {
        self.list_student_financial_statements_impl(lrn).await
    }

    async fn update_financial_statement(
        &self,
        soa_id: i64,
        statement: NewFinancialStatement,
    ) -> Result<Option<FinancialStatement>> {
        self.update_financial_statement_impl(soa_id, statement).await
    }

    async fn delete_financial_statement(&self, soa_id: i64) -> Result<bool> {
        self.delete_financial_statement_impl(soa_id).await
    }


    // 报表查询
    async fn list_roster_class_ids(&self, lrn: &str) -> Result<Vec<i64>> {
        self.list_roster_class_ids_impl(lrn).await
    }

    async fn list_attendance_records(
        &self,
        lrn: &str,
        class_ids: &[i64],
    ) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_records_impl(lrn, class_ids).await
    }

    async fn list_subject_names(&self, class_ids: &[i64]) -> Result<Vec<String>> {
        self.list_subject_names_impl(class_ids).await
    }

    async fn list_student_report_rows(
        &self,
        lrn: &str,
        class_ids: &[i64],
    ) -> Result<Vec<StudentReportRow>> {
        self.list_student_report_rows_impl(lrn, class_ids).await
    }

    async fn list_class_schedule(&self, lrn: &str) -> Result<Vec<ClassScheduleRow>> {
        self.list_class_schedule_impl(lrn).await
    }
}
