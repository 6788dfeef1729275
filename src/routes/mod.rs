//! 라우트 구성
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/` | 환영 메시지 |
//! | `GET` | `/health` | 서비스 상태 |
//! | `POST` | `/users` | 회원가입 |

use actix_web::error::JsonPayloadError;
use actix_web::{get, web, HttpRequest, HttpResponse};
use log::debug;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(root).service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/users").service(handlers::users::create_user));
}

/// 잘못된 JSON, 누락된 필드, 타입 불일치를 422 `ValidationError`로 응답합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        debug!("요청 본문 파싱 실패: {}", err);
        let detail = match &err {
            JsonPayloadError::Deserialize(e) => describe_json_error(e),
            JsonPayloadError::ContentType => "Content-Type은 application/json이어야 합니다".to_string(),
            _ => "요청 본문을 읽을 수 없습니다".to_string(),
        };
        AppError::ValidationError(detail).into()
    })
}

/// 역직렬화 오류 요약
///
/// serde 메시지는 입력값을 포함할 수 있으므로 누락 필드만 그대로 전달합니다.
fn describe_json_error(error: &serde_json::Error) -> String {
    let message = error.to_string();
    if message.starts_with("missing field") {
        return format!("잘못된 요청 본문: {}", message);
    }
    format!(
        "잘못된 요청 본문: 필드 타입 또는 형식이 올바르지 않습니다 (line {}, column {})",
        error.line(),
        error.column()
    )
}

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Welcome the Gerenciador de Vendas!" }))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "sales_manager_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_root_returns_welcome_message() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["message"], "Welcome the Gerenciador de Vendas!");
    }

    #[actix_web::test]
    async fn test_json_errors_do_not_echo_values() {
        let err = serde_json::from_str::<crate::domain::dto::users::request::CreateUserRequest>(
            r#"{"password": 12345678}"#,
        )
        .unwrap_err();
        assert!(!describe_json_error(&err).contains("12345678"));

        let err = serde_json::from_str::<crate::domain::dto::users::request::CreateUserRequest>("{}")
            .unwrap_err();
        assert!(describe_json_error(&err).contains("missing field"));
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }
}
