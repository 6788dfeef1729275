//! 사용자 엔티티
//!
//! MongoDB `users` 컬렉션의 문서 구조입니다. `email`, `cpf_cnpj`, `whatsapp`에는
//! 유일 인덱스가 걸려 있습니다.

use chrono::NaiveDate;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation::{GenderCode, ValidatedRegistration};

/// 계정 상태 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl From<UserStatus> for i32 {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Active => 1,
            UserStatus::Inactive => 2,
            UserStatus::Suspended => 99,
        }
    }
}

impl TryFrom<i32> for UserStatus {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(UserStatus::Active),
            2 => Ok(UserStatus::Inactive),
            99 => Ok(UserStatus::Suspended),
            other => Err(format!("알 수 없는 사용자 상태 코드: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub cpf_cnpj: String,
    pub whatsapp: String,
    pub name: String,
    /// bcrypt 해시
    pub password: String,
    pub sex: GenderCode,
    pub date_birthday: NaiveDate,
    pub date_created: DateTime,
    pub status: UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_login: Option<DateTime>,
}

impl User {
    /// 검증을 통과한 등록 데이터와 비밀번호 해시로 새 활성 사용자를 만듭니다.
    pub fn from_registration(registration: ValidatedRegistration, password_hash: String) -> Self {
        let ValidatedRegistration {
            email,
            document,
            phone,
            name,
            gender,
            birthdate,
            ..
        } = registration;

        Self {
            id: Uuid::new_v4(),
            email,
            cpf_cnpj: document.into_inner(),
            whatsapp: phone,
            name,
            password: password_hash,
            sex: gender,
            date_birthday: birthdate,
            date_created: DateTime::now(),
            status: UserStatus::Active,
            profile_photo: None,
            date_login: None,
        }
    }
}
