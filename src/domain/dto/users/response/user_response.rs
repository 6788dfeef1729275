use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::users::user::{User, UserStatus};
use crate::domain::validation::GenderCode;

/// 사용자 응답 DTO
///
/// 비밀번호 해시를 제외한 사용자 레코드의 모든 필드를 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub cpf_cnpj: String,
    pub whatsapp: String,
    pub name: String,
    pub sex: GenderCode,
    pub date_birthday: NaiveDate,
    pub date_created: DateTime<Utc>,
    pub status: UserStatus,
    pub profile_photo: Option<Vec<u8>>,
    pub date_login: Option<DateTime<Utc>>,
}

/// BSON 날짜(밀리초)를 UTC 시각으로 변환합니다.
fn to_utc(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            cpf_cnpj,
            whatsapp,
            name,
            sex,
            date_birthday,
            date_created,
            status,
            profile_photo,
            date_login,
            ..
        } = user;

        Self {
            id,
            email,
            cpf_cnpj,
            whatsapp,
            name,
            sex,
            date_birthday,
            date_created: to_utc(date_created),
            status,
            profile_photo,
            date_login: date_login.map(to_utc),
        }
    }
}
