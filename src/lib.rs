//! 판매 관리 백엔드
//!
//! 판매 관리 플랫폼의 회원가입 서비스입니다. 핵심은 사용자 등록 데이터의
//! 필드 검증 파이프라인으로, 문서 번호(CPF/CNPJ), 전화번호, 이름, 비밀번호 강도,
//! 성별 코드, 최소 나이를 저장 전에 검증합니다.
//!
//! # Features
//!
//! - **필드 검증 파이프라인**: 필드마다 하나의 검증기, 실패마다 하나의 오류 종류
//! - **회원가입 API**: `POST /users`, 성공 시 201, 검증 실패 시 422
//! - **MongoDB**: `email`, `cpf_cnpj`, `whatsapp` 유일 인덱스
//! - **메모리 저장소**: 개발/테스트용 동일 제약 구현
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 스키마 검증 → 검증 파이프라인 → 해싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (UserRepository 트레이트)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sales_manager_backend::domain::validation::RegistrationValidator;
//! use sales_manager_backend::repositories::users::InMemoryUserRepository;
//! use sales_manager_backend::services::users::UserService;
//!
//! let service = UserService::new(
//!     Arc::new(InMemoryUserRepository::new()),
//!     RegistrationValidator::default(),
//!     4,
//! );
//! let user = service.create_user(request).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
