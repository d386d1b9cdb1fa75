pub mod auth;

pub mod students;

pub mod enrollments;

pub mod payments;

pub mod messages;

pub mod records;

pub mod catalog;

pub mod reports;

pub mod files;

pub use auth::configure_auth_routes;
pub use catalog::configure_catalog_routes;
pub use enrollments::configure_enrollment_routes;
pub use files::configure_file_routes;
pub use messages::configure_message_routes;
pub use payments::configure_payment_routes;
pub use records::configure_record_routes;
pub use reports::configure_report_routes;
pub use students::configure_student_routes;
