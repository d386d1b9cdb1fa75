use serde::Serialize;

/// 响应中的业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1005,
    RateLimitExceeded = 1006,
    InternalServerError = 1007,

    // 认证
    AuthFailed = 2000,
    WrongPassword = 2001,
    TokenGenerationFailed = 2002,

    // 学生与报名
    StudentNotFound = 3000,
    EnrollmentNotFound = 3002,
    GradeLevelMismatch = 3003,
    ProfileImageNotFound = 3004,

    // 财务
    PaymentNotFound = 4000,
    TuitionNotFound = 4001,

    // 消息
    MessageNotFound = 5000,

    // 文件
    FileNotFound = 6000,
    FileUploadFailed = 6001,
}
