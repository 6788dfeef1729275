use async_trait::async_trait;
use log::{info, warn};
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::{StoreError, UserRepository};
use crate::db::Database;
use crate::domain::entities::users::user::User;

/// MongoDB 중복 키 오류 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

const COLLECTION_NAME: &str = "users";

/// 유일 인덱스가 걸린 필드
const UNIQUE_FIELDS: [&str; 3] = ["email", "cpf_cnpj", "whatsapp"];

/// MongoDB 오류를 저장소 실패 종류로 분류합니다.
///
/// - 중복 키 → `Integrity`
/// - BSON 직렬화/역직렬화, 잘못된 인자 → `Data`
/// - I/O, 서버 선택, 인증, 커넥션 풀 → `Operational`
/// - 그 외 → `Transaction`
pub fn classify_mongo_error(error: &MongoError) -> StoreError {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            StoreError::Integrity(write_error.message.clone())
        }
        ErrorKind::Command(command_error) if command_error.code == DUPLICATE_KEY_CODE => {
            StoreError::Integrity(command_error.message.clone())
        }
        ErrorKind::BsonSerialization(_)
        | ErrorKind::BsonDeserialization(_)
        | ErrorKind::InvalidArgument { .. } => StoreError::Data(error.to_string()),
        ErrorKind::Io(_)
        | ErrorKind::ServerSelection { .. }
        | ErrorKind::Authentication { .. }
        | ErrorKind::ConnectionPoolCleared { .. } => StoreError::Operational(error.to_string()),
        _ => StoreError::Transaction(error.to_string()),
    }
}

/// 중복 가입을 막는 유일 인덱스 목록
fn unique_indexes() -> Vec<IndexModel> {
    UNIQUE_FIELDS
        .iter()
        .map(|&field| {
            IndexModel::builder()
                .keys(doc! { field: 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name(format!("{}_unique", field))
                        .build(),
                )
                .build()
        })
        .collect()
}

pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(COLLECTION_NAME),
        }
    }

    /// `email`, `cpf_cnpj`, `whatsapp` 유일 인덱스를 만듭니다.
    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        self.collection
            .create_indexes(unique_indexes())
            .await
            .map_err(|e| classify_mongo_error(&e))?;

        info!("✅ {} 컬렉션 인덱스 생성 완료", COLLECTION_NAME);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        self.collection.insert_one(&user).await.map_err(|e| {
            let classified = classify_mongo_error(&e);
            warn!("사용자 저장 실패: {}", classified);
            classified
        })?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_are_operational() {
        let error = MongoError::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));

        assert!(matches!(classify_mongo_error(&error), StoreError::Operational(_)));
    }

    #[test]
    fn test_only_unique_indexes_are_created() {
        let indexes = unique_indexes();

        assert_eq!(indexes.len(), 3);
        for (index, field) in indexes.iter().zip(UNIQUE_FIELDS) {
            assert_eq!(index.keys, doc! { field: 1 });
            let options = index.options.as_ref().unwrap();
            assert_eq!(options.unique, Some(true));
            assert_eq!(options.name.as_deref(), Some(format!("{}_unique", field).as_str()));
        }
    }
}
