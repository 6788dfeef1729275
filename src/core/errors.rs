//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! 모든 계층의 실패는 최종적으로 [`AppError`]로 모이고, HTTP 경계에서만
//! 상태 코드와 JSON 응답으로 변환됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | AppError | 상태 코드 |
//! |----------|-----------|
//! | `Registration` (검증 실패) | 422 |
//! | `Registration` (`Unexpected`) | 500 |
//! | `ValidationError` (스키마, 잘못된 JSON) | 422 |
//! | `IntegrityError` (유일 제약 위반) | 400 |
//! | `DataError` (직렬화 등 데이터 오류) | 422 |
//! | `DatabaseError`, `InternalError` | 500 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "invalid_document", "field": "cpf_cnpj", "detail": "유효하지 않은 CPF입니다" }
//! ```
//!
//! `field`는 등록 검증 실패에만 포함됩니다. 500 응답의 `detail`은 고정 문구이며
//! 원인은 서버 로그에만 남습니다.
//!
//! ## Spring과의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ExceptionHandler` | `ResponseError::error_response()` |
//! | `ResponseEntity<ErrorResponse>` | `HttpResponse::build().json()` |
//! | `@ResponseStatus` | `ResponseError::status_code()` |
//! | Custom Exception | `AppError` 열거형 변형 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppResult, ErrorContext};
//!
//! fn hash(password: &str, cost: u32) -> AppResult<String> {
//!     bcrypt::hash(password, cost).context("비밀번호 해싱 실패")
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::validation::{ErrorKind, ValidationFailure};

#[derive(Error, Debug)]
pub enum AppError {
    /// 회원가입 필드 검증 실패
    #[error("{0}")]
    Registration(#[from] ValidationFailure),

    /// 요청 본문 스키마 위반 또는 잘못된 JSON
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 유일 제약 위반
    #[error("Integrity error: {0}")]
    IntegrityError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문 `error` 필드에 들어가는 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Registration(failure) => failure.kind.code(),
            AppError::ValidationError(_) => "validation_error",
            AppError::IntegrityError(_) => "integrity_error",
            AppError::DataError(_) => "data_error",
            AppError::DatabaseError(_) => "database_error",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Registration(failure) if failure.kind == ErrorKind::Unexpected => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Registration(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::IntegrityError(_) => StatusCode::BAD_REQUEST,
            AppError::DataError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let body = match self {
            AppError::Registration(failure) if status.is_client_error() => json!({
                "error": self.code(),
                "field": failure.field(),
                "detail": failure.detail,
            }),
            AppError::ValidationError(detail)
            | AppError::IntegrityError(detail)
            | AppError::DataError(detail) => json!({
                "error": self.code(),
                "detail": detail,
            }),
            _ => {
                error!("{}", self);
                json!({
                    "error": self.code(),
                    "detail": "internal server error",
                })
            }
        };

        HttpResponse::build(status).json(body)
    }
}

/// `validator` 스키마 오류를 필드별 메시지로 요약합니다.
///
/// 입력값(`params.value`)은 포함하지 않고, 설정된 메시지나 오류 코드만 사용합니다.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{}: {}", field, message)
                })
            })
            .collect();
        messages.sort();

        AppError::ValidationError(messages.join("; "))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥을 붙여 `AppError::InternalError`로 변환하는 확장 트레이트
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::Validate;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_registration_error_is_unprocessable() {
        let error = AppError::from(ValidationFailure::new(ErrorKind::InvalidDocument, "bad"));
        assert_eq!(error.error_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unexpected_registration_error_is_internal() {
        let error = AppError::from(ValidationFailure::new(ErrorKind::Unexpected, "boom"));
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::ValidationError("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::IntegrityError("x".into()), StatusCode::BAD_REQUEST),
            (AppError::DataError("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (AppError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InternalError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{error:?}");
        }
    }

    #[actix_web::test]
    async fn test_registration_body_carries_kind_and_field() {
        let body = body_json(AppError::from(ValidationFailure::new(
            ErrorKind::WeakPassword,
            "weak",
        )))
        .await;

        assert_eq!(body["error"], "weak_password");
        assert_eq!(body["field"], "password");
        assert_eq!(body["detail"], "weak");
    }

    #[actix_web::test]
    async fn test_internal_details_are_not_exposed() {
        let body = body_json(AppError::DatabaseError("connection refused at 10.0.0.3".into())).await;

        assert_eq!(body["error"], "database_error");
        assert_eq!(body["detail"], "internal server error");
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 8, message = "too short"))]
        password: String,
    }

    #[test]
    fn test_schema_errors_do_not_echo_values() {
        let sample = Sample {
            password: "secret1".to_string(),
        };
        let error = AppError::from(sample.validate().unwrap_err());

        let AppError::ValidationError(message) = &error else {
            panic!("Expected ValidationError");
        };
        assert_eq!(message, "password: too short");
        assert!(!error.to_string().contains("secret1"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let result: Result<u8, &str> = Ok(1);
        let value = result
            .with_context(|| panic!("closure must not run on Ok"))
            .unwrap();
        assert_eq!(value, 1);
    }
}
