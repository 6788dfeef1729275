//! # 사용자 생성 요청 DTO
//!
//! 회원가입 요청 본문(JSON)의 구조와 외곽 스키마 규칙을 정의합니다.
//! 여기서는 길이와 이메일 형식만 확인하고, 필드별 도메인 규칙은
//! [`RegistrationValidator`](crate::domain::validation::RegistrationValidator)가 담당합니다.
//!
//! ## 스키마 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `email` | 이메일 형식, 최대 50자 |
//! | `cpf_cnpj` | 11-14자 |
//! | `whatsapp` | 8-14자 |
//! | `name` | 7-100자 |
//! | `password` | 8-20자 |
//! | `sex` | 선택 (값 검증은 파이프라인에서) |
//! | `date_birthday` | `YYYY-MM-DD` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let request: CreateUserRequest = serde_json::from_str(body)?;
//! request.validate()?;
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소 (시스템 내 유일)
    #[validate(
        email(message = "유효한 이메일 주소를 입력해주세요"),
        length(max = 50, message = "이메일은 50자 이하여야 합니다")
    )]
    pub email: String,

    /// CPF(11자리) 또는 CNPJ(14자리) 번호
    #[validate(length(min = 11, max = 14, message = "CPF/CNPJ는 11-14자 사이여야 합니다"))]
    pub cpf_cnpj: String,

    /// WhatsApp 전화번호
    #[validate(length(min = 8, max = 14, message = "전화번호는 8-14자 사이여야 합니다"))]
    pub whatsapp: String,

    /// 사용자 이름
    #[validate(length(min = 7, max = 100, message = "이름은 7-100자 사이여야 합니다"))]
    pub name: String,

    /// 계정 비밀번호 (평문, 해싱 후 저장)
    #[validate(length(min = 8, max = 20, message = "비밀번호는 8-20자 사이여야 합니다"))]
    pub password: String,

    /// 성별 코드 (`M`, `F`, `O`)
    #[serde(default)]
    pub sex: Option<String>,

    /// 생년월일
    pub date_birthday: NaiveDate,
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("cpf_cnpj", &self.cpf_cnpj)
            .field("whatsapp", &self.whatsapp)
            .field("name", &self.name)
            .field("password", &"***")
            .field("sex", &self.sex)
            .field("date_birthday", &self.date_birthday)
            .finish()
    }
}
