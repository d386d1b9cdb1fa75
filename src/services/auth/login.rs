use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{
        requests::LoginRequest,
        responses::{AdminLoginResponse, StudentLoginResponse},
    },
    parties::entities::PartyKind,
};
use crate::services::responses::{storage_failure, validation_failed};
use crate::utils::jwt::{JwtUtils, TokenPair};
use crate::utils::password::verify_password;

use super::AuthService;

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Invalid credentials",
    ))
}

fn token_failure(e: jsonwebtoken::errors::Error) -> HttpResponse {
    error!("Failed to generate JWT token: {}", e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::TokenGenerationFailed,
        "Login failed, unable to generate token",
    ))
}

fn issue_tokens(
    party_id: &str,
    kind: PartyKind,
    remember_me: bool,
) -> Result<TokenPair, HttpResponse> {
    JwtUtils::generate_token_pair(party_id, kind, remember_me).map_err(token_failure)
}

pub async fn handle_student_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let credentials = match login_request.validate() {
        Ok(c) => c,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 按邮箱查学生并校验密码
    let student = match storage.get_student_by_email(&credentials.email).await {
        Ok(Some(student)) if verify_password(&credentials.password, &student.password_hash) => {
            student
        }
        Ok(_) => {
            info!("Student login rejected for {}", credentials.email);
            return Ok(invalid_credentials());
        }
        Err(e) => return Ok(storage_failure("Student login failed", e)),
    };

    // 2. 生成令牌对
    let token_pair = match issue_tokens(&student.lrn, PartyKind::Student, login_request.remember_me)
    {
        Ok(pair) => pair,
        Err(resp) => return Ok(resp),
    };
    info!("Student {} logged in successfully", student.lrn);

    let refresh_cookie =
        JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, login_request.remember_me);
    let response = StudentLoginResponse {
        id: student.lrn.clone(),
        student,
        token: token_pair.access_token,
        expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
    };

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}

pub async fn handle_admin_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let credentials = match login_request.validate() {
        Ok(c) => c,
        Err(errors) => return Ok(validation_failed(errors)),
    };
    let storage = service.get_storage(request);
    let config = service.get_config();

    let admin = match storage.get_admin_by_email(&credentials.email).await {
        Ok(Some(admin)) if verify_password(&credentials.password, &admin.password_hash) => admin,
        Ok(_) => {
            info!("Admin login rejected for {}", credentials.email);
            return Ok(invalid_credentials());
        }
        Err(e) => return Ok(storage_failure("Admin login failed", e)),
    };

    let token_pair =
        match issue_tokens(&admin.admin_id, PartyKind::Admin, login_request.remember_me) {
            Ok(pair) => pair,
            Err(resp) => return Ok(resp),
        };
    info!("Admin {} logged in successfully", admin.admin_id);

    let refresh_cookie =
        JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, login_request.remember_me);
    let response = AdminLoginResponse {
        id: admin.admin_id.clone(),
        admin,
        token: token_pair.access_token,
        expires_in: config.jwt.access_token_expiry * 60,
    };

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}
