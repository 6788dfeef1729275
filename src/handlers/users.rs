use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::services::users::user_service::UserService;

/// 회원가입
///
/// 성공 시 `201 Created`와 비밀번호 해시를 제외한 사용자 레코드를 반환합니다.
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
