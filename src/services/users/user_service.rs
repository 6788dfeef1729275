//! 사용자 등록 서비스
//!
//! 요청 스키마 검증 → 필드 검증 파이프라인 → 비밀번호 해싱 → 저장 순서로 처리합니다.

use std::sync::Arc;

use bcrypt::hash;
use log::{debug, info, warn};
use validator::Validate;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::domain::validation::RegistrationValidator;
use crate::repositories::users::UserRepository;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    validator: RegistrationValidator,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        validator: RegistrationValidator,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            validator,
            bcrypt_cost,
        }
    }

    /// 새 사용자를 등록합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 요청 스키마(길이, 이메일 형식) 위반
    /// * `AppError::Registration` - 필드 검증 파이프라인의 첫 번째 실패
    /// * `AppError::IntegrityError` - 이메일, CPF/CNPJ, 전화번호 중복
    /// * `AppError::InternalError` - 비밀번호 해싱 실패
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        request.validate()?;

        let registration = self.validator.validate(&request).map_err(|failure| {
            warn!(
                "회원가입 검증 실패: kind={}, field={}",
                failure.kind.code(),
                failure.field()
            );
            AppError::from(failure)
        })?;

        let hash_start = std::time::Instant::now();
        let password_hash =
            hash(registration.password.expose(), self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let document_kind = registration.document.kind();
        let user = User::from_registration(registration, password_hash);
        let created_user = self.user_repo.insert(user).await?;

        info!(
            "사용자 생성 완료: id={}, document={:?}, took={:?}",
            created_user.id,
            document_kind,
            start_time.elapsed()
        );

        Ok(UserResponse::from(created_user))
    }
}
