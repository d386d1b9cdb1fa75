/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <token>` 中的 access token，并把令牌对应的
 * 参与方（学生或管理员）放入请求扩展。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/v1")
 *     .wrap(RequireJWT)
 *     .route("/notifications", web::get().to(handler))
 * ```
 *
 * 处理函数中：
 *
 * ```rust,ignore
 * if let Some(party) = RequireJWT::extract_party(&req) {
 *     // party.id / party.kind
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 校验令牌签名、有效期与类型
 * 2. 先查缓存 `party:{token}`，未命中时按令牌中的编号查学生表与管理员表
 * 3. 查到的参与方类型必须与令牌中的角色一致
 * 4. 任一步失败返回 401
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::parties::entities::Party;
use crate::models::ErrorCode;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：提取并验证 JWT access token，返回参与方
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Party, String> {
    let token = JwtUtils::extract_bearer_token(req)
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = JwtUtils::verify_access_token(&token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let kind = claims
        .kind()
        .ok_or_else(|| "Invalid role in JWT".to_string())?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| "Cache not configured".to_string())?;

    let cache_key = format!("party:{token}");
    match cache.get_raw(&cache_key).await {
        CacheResult::Found(json) => match serde_json::from_str::<Party>(&json) {
            Ok(party) => return Ok(party),
            Err(_) => {
                cache.remove(&cache_key).await;
                info!("Failed to deserialize party from cache");
            }
        },
        _ => debug!("Party not found in cache for subject {}", claims.sub),
    };

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| "Storage not configured".to_string())?;

    let party = storage
        .find_party(&claims.sub)
        .await
        .map_err(|_| "Failed to retrieve account from storage".to_string())?
        .ok_or_else(|| "Account not found".to_string())?;

    if party.kind != kind {
        return Err("Account type does not match token".to_string());
    }

    if let Ok(party_json) = serde_json::to_string(&party) {
        cache
            .insert_raw(cache_key, party_json, AppConfig::get().cache.default_ttl)
            .await;
    }

    Ok(party)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
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
        Box::pin(async move {
            // 预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(HttpResponse::NoContent().finish().map_into_right_body()));
            }

            match extract_and_validate_jwt(&req).await {
                Ok(party) => {
                    debug!("JWT authentication successful for {} {}", party.kind, party.id);
                    req.extensions_mut().insert(party);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取参与方信息
impl RequireJWT {
    /// 当前登录的学生或管理员
    pub fn extract_party(req: &actix_web::HttpRequest) -> Option<Party> {
        req.extensions().get::<Party>().cloned()
    }

    /// 当前登录者编号
    pub fn extract_party_id(req: &actix_web::HttpRequest) -> Option<String> {
        req.extensions().get::<Party>().map(|party| party.id.clone())
    }
}
