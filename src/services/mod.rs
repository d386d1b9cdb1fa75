pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod enrollments;
pub mod files;
pub mod financial_statements;
pub mod grades;
pub mod messages;
pub mod notifications;
pub mod payments;
pub(crate) mod responses;
pub mod reports;
pub mod rosters;
pub mod sections;
pub mod students;
pub mod subjects;
pub mod tuition_fees;

pub use announcements::AnnouncementService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use enrollments::EnrollmentService;
pub use files::FileService;
pub use financial_statements::FinancialStatementService;
pub use grades::GradeService;
pub use messages::MessageService;
pub use notifications::NotificationService;
pub use payments::PaymentService;
pub use reports::ReportService;
pub use rosters::RosterService;
pub use sections::SectionService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use tuition_fees::TuitionFeeService;
