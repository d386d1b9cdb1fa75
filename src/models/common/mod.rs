pub mod error_code;
pub mod lenient;
pub mod pagination;
pub mod response;
pub mod validation;

pub use error_code::ErrorCode;
pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use response::{ApiResponse, ValidationErrorResponse};
pub use validation::FieldErrors;
