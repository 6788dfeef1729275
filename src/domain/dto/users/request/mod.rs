//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 외곽 스키마(길이, 이메일 형식)를 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 이메일, 길이 등 기본 형식 규칙 (`validator`)
//! 3. **도메인 검증**: 문서 번호, 전화번호, 이름, 비밀번호 강도, 성별, 나이
//!    ([`crate::domain::validation`])
//!
//! 1, 2단계 실패는 422 `ValidationError`, 3단계 실패는 422 등록 오류로 응답합니다.

pub mod create_user;

pub use create_user::CreateUserRequest;
