//! 전화번호(WhatsApp) 검증
//!
//! `phonenumber` 크레이트(libphonenumber 포트)로 기본 국가의 번호 체계에 맞춰
//! 파싱하고 유효성을 판정합니다.

use std::str::FromStr;

use phonenumber::country;
use phonenumber::Mode;

use super::{ErrorKind, FieldResult, ValidationFailure};

/// 검증 성공 시 반환할 번호 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneFormat {
    /// 입력 문자열을 그대로 반환 (기존 저장 데이터와의 호환)
    #[default]
    Echo,
    /// E.164 형식 (`+5514991396707`)
    E164,
}

impl FromStr for PhoneFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "echo" | "raw" => Ok(PhoneFormat::Echo),
            "e164" | "e.164" => Ok(PhoneFormat::E164),
            other => Err(format!("알 수 없는 전화번호 출력 형식: {}", other)),
        }
    }
}

/// 기본 국가와 출력 형식이 고정된 전화번호 검증기
#[derive(Debug, Clone, Copy)]
pub struct PhoneValidator {
    region: country::Id,
    format: PhoneFormat,
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new(country::Id::BR, PhoneFormat::Echo)
    }
}

impl PhoneValidator {
    pub fn new(region: country::Id, format: PhoneFormat) -> Self {
        Self { region, format }
    }

    /// 전화번호를 검증하고 설정된 형식으로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `ErrorKind::InvalidPhone` - 파싱 실패 또는 번호 체계상 유효하지 않은 번호
    pub fn validate(&self, value: &str) -> FieldResult<String> {
        let number = phonenumber::parse(Some(self.region), value).map_err(|_| invalid_phone())?;

        if !phonenumber::is_valid(&number) {
            return Err(invalid_phone());
        }

        Ok(match self.format {
            PhoneFormat::Echo => value.to_string(),
            PhoneFormat::E164 => number.format().mode(Mode::E164).to_string(),
        })
    }
}

/// 기본 설정(BR, 입력 그대로 반환)으로 전화번호를 검증합니다.
pub fn validate_phone(value: &str) -> FieldResult<String> {
    PhoneValidator::default().validate(value)
}

fn invalid_phone() -> ValidationFailure {
    ValidationFailure::new(ErrorKind::InvalidPhone, "유효하지 않은 전화번호입니다")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mobile_number_is_echoed() {
        assert_eq!(validate_phone("14991396707").unwrap(), "14991396707");
    }

    #[test]
    fn test_e164_output() {
        let validator = PhoneValidator::new(country::Id::BR, PhoneFormat::E164);
        assert_eq!(validator.validate("14991396707").unwrap(), "+5514991396707");
    }

    #[test]
    fn test_invalid_numbers() {
        for value in ["", "abc", "12", "00000000000", "1499139670799999"] {
            let err = validate_phone(value).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidPhone, "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("echo".parse::<PhoneFormat>().unwrap(), PhoneFormat::Echo);
        assert_eq!("E164".parse::<PhoneFormat>().unwrap(), PhoneFormat::E164);
        assert!("pretty".parse::<PhoneFormat>().is_err());
    }
}
