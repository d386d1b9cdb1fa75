use std::collections::HashMap;
use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 入学记录上的审核时间戳
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentStamp {
    Registration, // regapproval_date
    Payment,      // payment_approval
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: NewStudent) -> Result<Student>;
    // 通过 LRN 获取学生
    async fn get_student(&self, lrn: &str) -> Result<Option<Student>>;
    // 通过邮箱获取学生
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(&self, lrn: &str, changes: StudentChanges)
    -> Result<Option<Student>>;
    // 更新学生密码
    async fn update_student_password(&self, lrn: &str, password_hash: &str) -> Result<bool>;
    // 更新学生头像路径
    async fn update_student_pic(&self, lrn: &str, path: &str) -> Result<bool>;
    // 删除学生
    async fn delete_student(&self, lrn: &str) -> Result<bool>;
    // 批量导入学生（按 LRN 新增或更新）
    async fn upsert_students(&self, students: Vec<NewStudent>) -> Result<BulkUpsertResponse>;

    /// 管理员管理方法
    async fn create_admin(&self, admin: NewAdmin) -> Result<Admin>;
    async fn get_admin(&self, admin_id: &str) -> Result<Option<Admin>>;
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>>;
    async fn list_admins(&self) -> Result<Vec<Admin>>;
    async fn count_admins(&self) -> Result<u64>;

    /// 会话参与方查询（先查学生表，再查管理员表）
    async fn find_party(&self, id: &str) -> Result<Option<Party>>;
    // 批量查询，返回 编号 -> 参与方
    async fn find_parties(&self, ids: &[String]) -> Result<HashMap<String, Party>>;
    // 所有学生与管理员
    async fn list_parties(&self) -> Result<Vec<Party>>;

    /// 消息方法
    async fn create_message(&self, message: NewMessage) -> Result<Message>;
    // 双方之间的全部消息，按时间倒序
    async fn list_conversation(&self, party_a: &str, party_b: &str) -> Result<Vec<Message>>;
    // 发给某人的消息，按时间倒序
    async fn list_inbox(&self, receiver: &str, limit: Option<u64>) -> Result<Vec<Message>>;
    // 标记已读，消息不存在时返回 None
    async fn mark_message_read(&self, message_id: i64, read_at: i64) -> Result<Option<Message>>;

    /// 入学管理方法
    // 同一学生同一学年已存在则更新，返回 (记录, 是否新建)
    async fn upsert_enrollment(&self, enrollment: NewEnrollment) -> Result<(Enrollment, bool)>;
    // 新生注册：学生与首条入学记录在同一事务中写入
    async fn sign_up(
        &self,
        student: NewStudent,
        enrollment: NewEnrollment,
    ) -> Result<(Student, Enrollment)>;
    async fn get_latest_enrollment(&self, lrn: &str) -> Result<Option<Enrollment>>;
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;
    async fn update_enrollment(
        &self,
        enrol_id: i64,
        changes: EnrollmentChanges,
    ) -> Result<Option<Enrollment>>;
    async fn stamp_enrollment(
        &self,
        enrol_id: i64,
        stamp: EnrollmentStamp,
        at: i64,
    ) -> Result<Option<Enrollment>>;
    async fn delete_enrollment(&self, enrol_id: i64) -> Result<bool>;
    // 最近的缴费审核记录
    async fn list_payment_approvals(&self, lrn: &str, limit: u64) -> Result<Vec<Enrollment>>;

    /// 缴费方法
    async fn create_payment(&self, payment: NewPayment) -> Result<Payment>;
    async fn or_number_exists(&self, or_number: &str) -> Result<bool>;
    async fn get_payment(&self, payment_id: i64) -> Result<Option<Payment>>;
    async fn list_payments_with_pagination(
        &self,
        query: PaymentListQuery,
    ) -> Result<PaymentListResponse>;
    // 某学生的全部缴费，按时间倒序
    async fn list_student_payments(&self, lrn: &str) -> Result<Vec<Payment>>;

    /// 公告方法
    async fn create_announcement(&self, announcement: NewAnnouncement) -> Result<Announcement>;
    async fn get_announcement(&self, ancmnt_id: i64) -> Result<Option<Announcement>>;
    async fn list_announcements_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<AnnouncementListResponse>;
    async fn list_recent_announcements(&self, limit: u64) -> Result<Vec<Announcement>>;
    async fn update_announcement(
        &self,
        ancmnt_id: i64,
        announcement: NewAnnouncement,
    ) -> Result<Option<Announcement>>;
    async fn delete_announcement(&self, ancmnt_id: i64) -> Result<bool>;
    // 公告附带发布人与科目信息
    async fn get_announcement_detail(&self, ancmnt_id: i64) -> Result<Option<AnnouncementDetail>>;

    /// 成绩方法
    async fn create_grade(&self, grade: NewGrade) -> Result<Grade>;
    async fn get_grade(&self, grade_id: i64) -> Result<Option<Grade>>;
    async fn list_grades_with_pagination(&self, query: ClassRecordQuery)
    -> Result<GradeListResponse>;
    async fn update_grade(&self, grade_id: i64, grade: NewGrade) -> Result<Option<Grade>>;
    async fn delete_grade(&self, grade_id: i64) -> Result<bool>;

    /// 考勤方法
    async fn create_attendance(&self, attendance: NewAttendance) -> Result<Attendance>;
    async fn get_attendance(&self, attendance_id: i64) -> Result<Option<Attendance>>;
    async fn list_attendance_with_pagination(
        &self,
        query: ClassRecordQuery,
    ) -> Result<AttendanceListResponse>;
    async fn update_attendance(
        &self,
        attendance_id: i64,
        attendance: NewAttendance,
    ) -> Result<Option<Attendance>>;
    async fn delete_attendance(&self, attendance_id: i64) -> Result<bool>;

    /// 分组方法
    async fn create_section(&self, section: NewSection) -> Result<Section>;
    async fn get_section(&self, section_id: i64) -> Result<Option<Section>>;
    async fn list_sections_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<SectionListResponse>;
    async fn update_section(&self, section_id: i64, section: NewSection)
    -> Result<Option<Section>>;
    async fn delete_section(&self, section_id: i64) -> Result<bool>;

    /// 科目方法
    async fn create_subject(&self, subject: NewSubject) -> Result<Subject>;
    async fn get_subject(&self, subject_id: i64) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<SubjectListResponse>;
    async fn update_subject(&self, subject_id: i64, subject: NewSubject)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;

    /// 课程班方法
    async fn create_class(&self, class: NewClass) -> Result<Class>;
    async fn get_class(&self, class_id: i64) -> Result<Option<Class>>;
    async fn list_classes_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<ClassListResponse>;
    async fn update_class(&self, class_id: i64, class: NewClass) -> Result<Option<Class>>;
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 花名册方法
    async fn create_roster(&self, roster: NewRoster) -> Result<Roster>;
    async fn get_roster(&self, roster_id: i64) -> Result<Option<Roster>>;
    async fn list_rosters_with_pagination(
        &self,
        query: ClassRecordQuery,
    ) -> Result<RosterListResponse>;
    async fn delete_roster(&self, roster_id: i64) -> Result<bool>;

    /// 学费标准方法
    async fn create_tuition_fee(&self, fee: NewTuitionFee) -> Result<TuitionFee>;
    async fn get_tuition_fee(&self, fee_id: i64) -> Result<Option<TuitionFee>>;
    async fn get_tuition_fee_by_grade(&self, grade_level: &str) -> Result<Option<TuitionFee>>;
    async fn list_tuition_fees_with_pagination(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<TuitionFeeListResponse>;
    async fn update_tuition_fee(
        &self,
        fee_id: i64,
        fee: NewTuitionFee,
    ) -> Result<Option<TuitionFee>>;
    async fn delete_tuition_fee(&self, fee_id: i64) -> Result<bool>;

    /// 对账单方法
    async fn create_financial_statement(
        &self,
        statement: NewFinancialStatement,
        uploaded_at: i64,
    ) -> Result<FinancialStatement>;
    async fn get_financial_statement(&self, soa_id: i64) -> Result<Option<FinancialStatement>>;
    async fn list_financial_statements_with_pagination(
        &self,
        lrn: Option<String>,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<FinancialStatementListResponse>;
    async fn list_student_financial_statements(&self, lrn: &str)
    -> Result<Vec<FinancialStatement>>;
    async fn update_financial_statement(
        &self,
        soa_id: i64,
        statement: NewFinancialStatement,
    ) -> Result<Option<FinancialStatement>>;
    async fn delete_financial_statement(&self, soa_id: i64) -> Result<bool>;

    /// 报表查询
    // 花名册中的课程班编号
    async fn list_roster_class_ids(&self, lrn: &str) -> Result<Vec<i64>>;
    // 学生在指定课程班中的考勤，附科目名
    async fn list_attendance_records(
        &self,
        lrn: &str,
        class_ids: &[i64],
    ) -> Result<Vec<AttendanceRecord>>;
    // 指定课程班的科目名（去重，按名称排序）
    async fn list_subject_names(&self, class_ids: &[i64]) -> Result<Vec<String>>;
    // 成绩单原始行
    async fn list_student_report_rows(
        &self,
        lrn: &str,
        class_ids: &[i64],
    ) -> Result<Vec<StudentReportRow>>;
    // 学生课表
    async fn list_class_schedule(&self, lrn: &str) -> Result<Vec<ClassScheduleRow>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
