//! 速率限制中间件
//!
//! 固定窗口计数：已登录时按参与方编号计数，否则按客户端 IP，
//! 超过限制返回 429 并带 `Retry-After`。

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

/// 全局速率限制缓存
/// 键: 前缀:标识，值: (窗口开始时间戳, 请求计数)
static RATE_LIMIT_CACHE: Lazy<Cache<String, (i64, u32)>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(3600)) // 最长窗口
        .max_capacity(100_000)
        .build()
});

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录端点限制：5次/分钟/IP
    pub fn login() -> Self {
        Self::new(5, 60).with_prefix("login")
    }

    /// 新生注册限制：3次/分钟/IP
    pub fn sign_up() -> Self {
        Self::new(3, 60).with_prefix("sign_up")
    }

    /// 刷新令牌限制：10次/分钟/IP
    pub fn refresh_token() -> Self {
        Self::new(10, 60).with_prefix("refresh")
    }

    /// 文件上传限制：10次/分钟/参与方
    pub fn file_upload() -> Self {
        Self::new(10, 60).with_prefix("upload")
    }
}

fn valid_ip(raw: &str) -> Option<String> {
    let ip = raw.trim();
    ip.parse::<std::net::IpAddr>().ok().map(|_| ip.to_string())
}

/// 客户端 IP：连接信息优先，其次 X-Forwarded-For 的第一项，再次 X-Real-IP
///
/// 转发头可被伪造，部署在反向代理后时需由代理覆盖这些头。
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
    };

    connection_ip
        .as_deref()
        .and_then(valid_ip)
        .or_else(|| {
            header("X-Forwarded-For")
                .and_then(|value| value.split(',').next().and_then(valid_ip))
        })
        .or_else(|| header("X-Real-IP").and_then(|value| valid_ip(&value)))
        .or(connection_ip)
        .unwrap_or_else(|| "unknown".to_string())
}

/// 限制键：`前缀:party:编号` 或 `前缀:ip:地址`
fn limit_key(prefix: &str, party_id: Option<String>, client_ip: impl FnOnce() -> String) -> String {
    let identifier = match party_id {
        Some(id) => format!("party:{id}"),
        None => format!("ip:{}", client_ip()),
    };
    if prefix.is_empty() {
        identifier
    } else {
        format!("{prefix}:{identifier}")
    }
}

/// 计算本次请求后的窗口状态，返回 ((窗口开始, 计数), 是否放行)
fn next_window(
    previous: Option<(i64, u32)>,
    now: i64,
    max_requests: u32,
    window_secs: u64,
) -> ((i64, u32), bool) {
    match previous {
        Some((start, count)) if now - start < window_secs as i64 => {
            if count >= max_requests {
                ((start, count), false)
            } else {
                ((start, count + 1), true)
            }
        }
        _ => ((now, 1), max_requests > 0),
    }
}

/// 创建速率限制错误响应
fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later.",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            key_prefix: self.key_prefix.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let max_requests = self.max_requests;
        let window_secs = self.window_secs;
        let key_prefix = self.key_prefix.clone();

        Box::pin(async move {
            let cache_key = limit_key(
                &key_prefix,
                RequireJWT::extract_party_id(req.request()),
                || extract_client_ip(&req),
            );

            let now = chrono::Utc::now().timestamp();
            let previous = RATE_LIMIT_CACHE.get(&cache_key).await;
            let (window, allowed) = next_window(previous, now, max_requests, window_secs);

            if !allowed {
                let retry_after = (window.0 + window_secs as i64 - now).max(1) as u64;
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, window.1, max_requests
                );
                return Ok(req
                    .into_response(create_rate_limit_response(retry_after).map_into_right_body()));
            }

            RATE_LIMIT_CACHE.insert(cache_key, window).await;

            Ok(srv.call(req).await?.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");

        let sign_up = RateLimit::sign_up();
        assert_eq!(sign_up.max_requests, 3);

        let upload = RateLimit::file_upload();
        assert_eq!(upload.key_prefix, "upload");
    }

    #[test]
    fn test_window_counts_and_blocks() {
        let (w, ok) = next_window(None, 100, 2, 60);
        assert_eq!((w, ok), ((100, 1), true));
        let (w, ok) = next_window(Some(w), 110, 2, 60);
        assert_eq!((w, ok), ((100, 2), true));
        let (w, ok) = next_window(Some(w), 120, 2, 60);
        assert_eq!((w, ok), ((100, 2), false));
    }

    #[test]
    fn test_limit_key_prefers_party() {
        let key = limit_key("upload", Some("123456789012".into()), || unreachable!());
        assert_eq!(key, "upload:party:123456789012");
        assert_eq!(limit_key("", None, || "10.0.0.1".into()), "ip:10.0.0.1");
        assert_eq!(limit_key("login", None, || "10.0.0.1".into()), "login:ip:10.0.0.1");
    }

    #[test]
    fn test_valid_ip_trims_and_rejects_garbage() {
        assert_eq!(valid_ip(" 192.168.1.7 ").as_deref(), Some("192.168.1.7"));
        assert_eq!(valid_ip("::1").as_deref(), Some("::1"));
        assert!(valid_ip("not-an-ip").is_none());
    }

    #[test]
    fn test_window_resets_after_expiry() {
        let (w, ok) = next_window(Some((100, 5)), 160, 5, 60);
        assert_eq!((w, ok), ((160, 1), true));
    }
}
