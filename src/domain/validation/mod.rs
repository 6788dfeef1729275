//! # 회원가입 필드 검증 파이프라인
//!
//! 사용자 등록 요청의 각 필드를 독립적으로 검증하는 순수 함수 모음입니다.
//! 모든 검증기는 입력값을 받아 정규화된 값 또는 [`ValidationFailure`]를 반환하며,
//! I/O나 공유 상태를 전혀 사용하지 않습니다.
//!
//! ## 검증기 구성
//!
//! | 모듈 | 필드 | 실패 시 ErrorKind |
//! |------|------|-------------------|
//! | [`document`] | `cpf_cnpj` | `InvalidDocument` |
//! | [`phone`] | `whatsapp` | `InvalidPhone` |
//! | [`name`] | `name` | `InvalidName` |
//! | [`password`] | `password` | `WeakPassword` |
//! | [`gender`] | `sex` | `InvalidGenderCode` |
//! | [`birthdate`] | `date_birthday` | `Underage` |
//!
//! [`pipeline::RegistrationValidator`]가 위 검증기들을 선언 순서대로 조합합니다.
//!
//! ## HTTP 매핑
//!
//! 검증기 자체는 HTTP를 알지 못합니다. `ErrorKind` → 상태 코드 변환은
//! `core::errors::AppError`의 `ResponseError` 구현에서만 수행됩니다.

pub mod birthdate;
pub mod document;
pub mod gender;
pub mod name;
pub mod password;
pub mod phone;
pub mod pipeline;

use serde::Serialize;
use thiserror::Error;

pub use birthdate::{age_on, validate_birthdate, validate_birthdate_on};
pub use document::{validate_document, DocumentKind, DocumentNumber};
pub use gender::{validate_gender, GenderCode};
pub use name::validate_name;
pub use password::{validate_password, PlainPassword};
pub use phone::{validate_phone, PhoneFormat, PhoneValidator};
pub use pipeline::{RegistrationValidator, ValidatedRegistration};

/// 검증 실패 종류
///
/// 닫힌 열거형으로, 검증기마다 정확히 하나의 종류가 대응됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidDocument,
    InvalidPhone,
    InvalidName,
    WeakPassword,
    InvalidGenderCode,
    Underage,
    /// 문서화된 입력 범위 안에서는 발생하지 않아야 하는 검증기 내부 오류
    Unexpected,
}

impl ErrorKind {
    /// 이 실패가 귀속되는 요청 필드명
    pub fn field(&self) -> &'static str {
        match self {
            ErrorKind::InvalidDocument => "cpf_cnpj",
            ErrorKind::InvalidPhone => "whatsapp",
            ErrorKind::InvalidName => "name",
            ErrorKind::WeakPassword => "password",
            ErrorKind::InvalidGenderCode => "sex",
            ErrorKind::Underage => "date_birthday",
            ErrorKind::Unexpected => "request",
        }
    }

    /// 응답 본문에 사용하는 안정적인 코드 문자열
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidDocument => "invalid_document",
            ErrorKind::InvalidPhone => "invalid_phone",
            ErrorKind::InvalidName => "invalid_name",
            ErrorKind::WeakPassword => "weak_password",
            ErrorKind::InvalidGenderCode => "invalid_gender_code",
            ErrorKind::Underage => "underage",
            ErrorKind::Unexpected => "unexpected_validation_failure",
        }
    }
}

/// 필드 검증 실패 값
///
/// `detail`은 사용자에게 그대로 노출되므로 비밀번호 같은 민감 정보를 담지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{detail}")]
pub struct ValidationFailure {
    pub kind: ErrorKind,
    pub detail: String,
}

impl ValidationFailure {
    pub fn new(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.kind.field()
    }
}

/// 단일 필드 검증 결과
pub type FieldResult<T> = Result<T, ValidationFailure>;
