use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ErrorCode, FieldErrors};

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

/// 422 响应体：字段名 -> 错误信息列表
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct ValidationErrorResponse {
    pub errors: FieldErrors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_shape() {
        let mut errors = FieldErrors::new();
        errors.add("LRN", "The LRN field is required.");
        let body = ApiResponse::error(
            ErrorCode::ValidationFailed,
            ValidationErrorResponse { errors },
            "The given data was invalid.",
        );
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], ErrorCode::ValidationFailed as i32);
        assert_eq!(json["data"]["errors"]["LRN"][0], "The LRN field is required.");
    }

    #[test]
    fn test_empty_response_omits_data() {
        let json = serde_json::to_value(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))
        .unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["message"], "Student not found");
    }
}
