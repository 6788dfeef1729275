//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 에러 타입과 결과 별칭을 제공합니다.
//!
//! - [`errors::AppError`] - 모든 계층의 실패를 모으는 에러 타입
//! - [`errors::AppResult`] - `Result<T, AppError>` 별칭
//! - [`errors::ErrorContext`] - 외부 에러에 문맥을 붙이는 확장 트레이트

pub mod errors;
