//! # User Repository Module
//!
//! 사용자 레코드 저장소 추상화와 구현체입니다.
//!
//! - [`MongoUserRepository`] - MongoDB `users` 컬렉션
//! - [`InMemoryUserRepository`] - 프로세스 메모리 (개발/테스트용)
//!
//! 두 구현 모두 `email`, `cpf_cnpj`, `whatsapp`의 유일성을 보장하며,
//! 실패는 [`StoreError`]로 분류해서 반환합니다. `AppError`로의 변환은
//! 이 모듈의 `From<StoreError>` 구현 한 곳에서만 일어납니다.

pub mod memory_repo;
pub mod user_repo;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::errors::AppError;
use crate::domain::entities::users::user::User;

pub use memory_repo::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// 저장소 실패 분류
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// 유일 제약 위반 (중복 키)
    #[error("integrity constraint violated: {0}")]
    Integrity(String),

    /// 직렬화 등 데이터 형식 오류
    #[error("data error: {0}")]
    Data(String),

    /// 연결, 서버 선택, 인증 등 운영 오류
    #[error("database operational error: {0}")]
    Operational(String),

    /// 그 외 분류되지 않은 실패
    #[error("database transaction failed: {0}")]
    Transaction(String),
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Integrity(_) => {
                AppError::IntegrityError("integrity constraint violated".to_string())
            }
            StoreError::Data(detail) => AppError::DataError(detail),
            StoreError::Operational(detail) => AppError::DatabaseError(detail),
            StoreError::Transaction(detail) => {
                AppError::DatabaseError(format!("database transaction failed: {}", detail))
            }
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자를 저장하고 저장된 레코드를 반환합니다.
    async fn insert(&self, user: User) -> Result<User, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_store_error_mapping() {
        let cases = [
            (StoreError::Integrity("email".into()), StatusCode::BAD_REQUEST),
            (StoreError::Data("bad bson".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (StoreError::Operational("io".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (StoreError::Transaction("?".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(AppError::from(error).status_code(), expected);
        }
    }

    #[test]
    fn test_integrity_detail_hides_offending_value() {
        let error = AppError::from(StoreError::Integrity("dup key: { email: \"a@b.c\" }".into()));
        match error {
            AppError::IntegrityError(detail) => {
                assert_eq!(detail, "integrity constraint violated");
            }
            other => panic!("Expected IntegrityError, got {other:?}"),
        }
    }
}
