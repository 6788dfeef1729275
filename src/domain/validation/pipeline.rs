//! # 회원가입 검증 파이프라인
//!
//! 여섯 개의 필드 검증기를 하나의 레코드 단위 검증으로 조합합니다.
//!
//! ## 평가 순서
//!
//! ```text
//! cpf_cnpj → whatsapp → name → password → sex → date_birthday
//! ```
//!
//! - [`RegistrationValidator::validate`]: 첫 번째 실패에서 즉시 중단하고 그 실패 하나만 반환
//! - [`RegistrationValidator::validate_all`]: 모든 필드를 평가하고 실패를 전부 모아 반환
//!
//! HTTP 경계는 `validate`를 사용하므로 실패한 요청당 하나의 422 응답만 나갑니다.

use chrono::{Local, NaiveDate};

use super::birthdate::{validate_birthdate_on, DEFAULT_MINIMUM_AGE};
use super::{
    validate_document, validate_gender, validate_name, validate_password, DocumentNumber,
    FieldResult, GenderCode, PhoneValidator, PlainPassword, ValidationFailure,
};
use crate::config::RegistrationPolicy;
use crate::domain::dto::users::request::CreateUserRequest;

/// 모든 필드 검증을 통과한 정규화된 등록 데이터
///
/// 영속성 계층으로 넘겨지기 전의 형태이며, 비밀번호는 아직 평문입니다.
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    pub email: String,
    pub document: DocumentNumber,
    pub phone: String,
    pub name: String,
    pub password: PlainPassword,
    pub gender: GenderCode,
    pub birthdate: NaiveDate,
}

/// 등록 요청 검증기
#[derive(Debug, Clone, Copy)]
pub struct RegistrationValidator {
    phone: PhoneValidator,
    minimum_age: u32,
}

impl Default for RegistrationValidator {
    fn default() -> Self {
        Self::new(PhoneValidator::default(), DEFAULT_MINIMUM_AGE)
    }
}

impl RegistrationValidator {
    pub fn new(phone: PhoneValidator, minimum_age: u32) -> Self {
        Self { phone, minimum_age }
    }

    pub fn from_policy(policy: &RegistrationPolicy) -> Self {
        Self::new(
            PhoneValidator::new(policy.phone_region, policy.phone_format),
            policy.minimum_age,
        )
    }

    /// 오늘 날짜 기준으로 검증하며 첫 번째 실패에서 중단합니다.
    pub fn validate(&self, request: &CreateUserRequest) -> FieldResult<ValidatedRegistration> {
        self.validate_on(request, Local::now().date_naive())
    }

    /// 주어진 기준일로 검증하며 첫 번째 실패에서 중단합니다.
    pub fn validate_on(
        &self,
        request: &CreateUserRequest,
        today: NaiveDate,
    ) -> FieldResult<ValidatedRegistration> {
        Ok(ValidatedRegistration {
            document: validate_document(&request.cpf_cnpj)?,
            phone: self.phone.validate(&request.whatsapp)?,
            name: validate_name(&request.name)?,
            password: validate_password(&request.password)?,
            gender: validate_gender(request.sex.as_deref())?,
            birthdate: validate_birthdate_on(request.date_birthday, today, self.minimum_age)?,
            email: request.email.clone(),
        })
    }

    /// 오늘 날짜 기준으로 모든 필드를 평가합니다.
    pub fn validate_all(
        &self,
        request: &CreateUserRequest,
    ) -> Result<ValidatedRegistration, Vec<ValidationFailure>> {
        self.validate_all_on(request, Local::now().date_naive())
    }

    /// 모든 필드를 독립적으로 평가하고, 실패가 있으면 선언 순서대로 전부 반환합니다.
    pub fn validate_all_on(
        &self,
        request: &CreateUserRequest,
        today: NaiveDate,
    ) -> Result<ValidatedRegistration, Vec<ValidationFailure>> {
        let document = validate_document(&request.cpf_cnpj);
        let phone = self.phone.validate(&request.whatsapp);
        let name = validate_name(&request.name);
        let password = validate_password(&request.password);
        let gender = validate_gender(request.sex.as_deref());
        let birthdate = validate_birthdate_on(request.date_birthday, today, self.minimum_age);

        match (document, phone, name, password, gender, birthdate) {
            (Ok(document), Ok(phone), Ok(name), Ok(password), Ok(gender), Ok(birthdate)) => {
                Ok(ValidatedRegistration {
                    email: request.email.clone(),
                    document,
                    phone,
                    name,
                    password,
                    gender,
                    birthdate,
                })
            }
            (document, phone, name, password, gender, birthdate) => Err([
                document.err(),
                phone.err(),
                name.err(),
                password.err(),
                gender.err(),
                birthdate.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}
