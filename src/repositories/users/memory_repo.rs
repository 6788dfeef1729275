use std::sync::RwLock;

use async_trait::async_trait;

use super::{StoreError, UserRepository};
use crate::domain::entities::users::user::User;

/// 메모리 기반 사용자 저장소
///
/// MongoDB 유일 인덱스와 동일하게 `email`, `cpf_cnpj`, `whatsapp` 중복을 거부합니다.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }
}

/// 기존 사용자와 충돌하는 첫 번째 유일 필드명
fn conflicting_field(existing: &User, candidate: &User) -> Option<&'static str> {
    if existing.email == candidate.email {
        Some("email")
    } else if existing.cpf_cnpj == candidate.cpf_cnpj {
        Some("cpf_cnpj")
    } else if existing.whatsapp == candidate.whatsapp {
        Some("whatsapp")
    } else {
        None
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|_| StoreError::Transaction("사용자 저장소 잠금 실패".to_string()))?;

        if let Some(field) = users.iter().find_map(|existing| conflicting_field(existing, &user)) {
            return Err(StoreError::Integrity(format!("duplicate {}", field)));
        }

        users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::UserStatus;
    use crate::domain::validation::GenderCode;
    use chrono::NaiveDate;
    use mongodb::bson::DateTime;
    use uuid::Uuid;

    fn user(email: &str, cpf_cnpj: &str, whatsapp: &str) -> User {
        User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            cpf_cnpj: cpf_cnpj.to_string(),
            whatsapp: whatsapp.to_string(),
            name: "Lucas Camargo".to_string(),
            password: "hash".to_string(),
            sex: GenderCode::Male,
            date_birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            date_created: DateTime::now(),
            status: UserStatus::Active,
            profile_photo: None,
            date_login: None,
        }
    }

    #[actix_web::test]
    async fn test_insert_returns_stored_user() {
        let repo = InMemoryUserRepository::new();
        let stored = repo
            .insert(user("a@example.com", "88877936037", "14991396707"))
            .await
            .unwrap();

        assert_eq!(stored.email, "a@example.com");
        assert_eq!(repo.len(), 1);
    }

    #[actix_web::test]
    async fn test_each_unique_field_is_enforced() {
        let repo = InMemoryUserRepository::new();
        repo.insert(user("a@example.com", "88877936037", "14991396707"))
            .await
            .unwrap();

        let duplicates = [
            (user("a@example.com", "11222333000181", "14991396708"), "duplicate email"),
            (user("b@example.com", "88877936037", "14991396708"), "duplicate cpf_cnpj"),
            (user("b@example.com", "11222333000181", "14991396707"), "duplicate whatsapp"),
        ];

        for (candidate, expected) in duplicates {
            let err = repo.insert(candidate).await.unwrap_err();
            assert_eq!(err, StoreError::Integrity(expected.to_string()));
        }
        assert_eq!(repo.len(), 1);
    }
}
