//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::UserRepository`] 트레이트에만 의존하며,
//! 실행 시 `STORAGE_BACKEND` 설정에 따라 MongoDB 또는 메모리 구현체가 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
//! let stored = repo.insert(user).await?;
//! ```

pub mod users;
