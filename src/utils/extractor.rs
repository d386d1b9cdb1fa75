//! 路径参数提取器
//!
//! 在进入处理函数之前校验路径参数，非法值直接返回 400。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ApiResponse, ErrorCode};

// 参与方编号：LRN 或管理员编号
static PARTY_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,50}$").expect("invalid party id regex"));

fn bad_request(message: String) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::error_empty(ErrorCode::BadRequest, message.clone()));
    InternalError::from_response(message, response).into()
}

/// 取第一个路径参数
fn first_segment(req: &HttpRequest) -> Option<String> {
    req.match_info()
        .iter()
        .next()
        .map(|(_, value)| value.to_string())
}

/// 正整数编号
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match first_segment(req).map(|raw| raw.parse::<i64>()) {
            Some(Ok(id)) if id > 0 => Ok(SafeIDI64(id)),
            Some(_) => Err(bad_request("Invalid id in path".to_string())),
            None => Err(bad_request("Missing id in path".to_string())),
        };
        ready(result)
    }
}

/// 学生或管理员编号
#[derive(Debug, Clone)]
pub struct SafePartyId(pub String);

impl FromRequest for SafePartyId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = match first_segment(req) {
            Some(raw) if PARTY_ID_RE.is_match(&raw) => Ok(SafePartyId(raw)),
            Some(raw) => Err(bad_request(format!("Invalid identifier in path: {raw}"))),
            None => Err(bad_request("Missing identifier in path".to_string())),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_party_id_pattern() {
        assert!(PARTY_ID_RE.is_match("123456789012"));
        assert!(PARTY_ID_RE.is_match("ADM-0001"));
        assert!(!PARTY_ID_RE.is_match("../etc"));
        assert!(!PARTY_ID_RE.is_match(""));
    }

    #[actix_web::test]
    async fn test_safe_id_rejects_non_numeric() {
        let req = actix_web::test::TestRequest::default()
            .param("id", "abc")
            .to_http_request();
        let mut payload = Payload::None;
        assert!(SafeIDI64::from_request(&req, &mut payload).await.is_err());

        let req = actix_web::test::TestRequest::default()
            .param("id", "42")
            .to_http_request();
        let id = SafeIDI64::from_request(&req, &mut payload).await.unwrap();
        assert_eq!(id.0, 42);
    }
}
