//! # Domain Module
//!
//! - [`dto`] - HTTP 요청/응답 데이터 구조
//! - [`entities`] - 영속성 계층에 저장되는 엔티티
//! - [`validation`] - 회원가입 필드 검증 파이프라인

pub mod dto;
pub mod entities;
pub mod validation;
