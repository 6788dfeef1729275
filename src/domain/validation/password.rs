//! 비밀번호 강도 검증

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ErrorKind, FieldResult, ValidationFailure};

const SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// 문자열 전체가 허용 문자로만 이루어져야 함 (최소 8자)
static PASSWORD_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$").expect("비밀번호 정규식이 올바르지 않습니다"));

/// 평문 비밀번호
///
/// `Debug` 출력에서 값을 가립니다. 해싱 직전까지만 메모리에 유지됩니다.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(***)")
    }
}

/// 비밀번호 구성 규칙을 검증합니다.
///
/// 최소 8자, 소문자/대문자/숫자/특수문자(`@$!%*?&`) 각 1개 이상,
/// 그 외 문자는 허용하지 않습니다. 실패 메시지에는 입력값을 포함하지 않습니다.
pub fn validate_password(value: &str) -> FieldResult<PlainPassword> {
    let has_lowercase = value.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| SPECIAL_CHARS.contains(&c));

    if !(has_lowercase && has_uppercase && has_digit && has_special)
        || !PASSWORD_CHARSET.is_match(value)
    {
        return Err(ValidationFailure::new(
            ErrorKind::WeakPassword,
            "비밀번호가 충분히 강력하지 않습니다. 8자 이상이며 대문자, 소문자, 숫자, \
             특수문자(@$!%*?&)를 각각 하나 이상 포함해야 합니다",
        ));
    }

    Ok(PlainPassword(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_passwords() {
        assert_eq!(validate_password("Abc123!@").unwrap().expose(), "Abc123!@");
        assert!(validate_password("159753Lucas$").is_ok());
    }

    #[test]
    fn test_weak_passwords() {
        for value in ["abcdefgh", "ABCDEFGH", "12345678", "Abcdefgh", "Abc12345", "Ab1!"] {
            let err = validate_password(value).unwrap_err();
            assert_eq!(err.kind, ErrorKind::WeakPassword, "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_characters_outside_the_allowed_set() {
        assert!(validate_password("Abc123!@ ").is_err());
        assert!(validate_password("Abc123!@#").is_err());
        assert!(validate_password("Abç123!@").is_err());
    }

    #[test]
    fn test_failure_never_echoes_password() {
        let secret = "abcdefgh-Secret";
        let err = validate_password(secret).unwrap_err();
        assert!(!err.detail.contains(secret));
        assert!(!err.to_string().contains(secret));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = validate_password("Abc123!@").unwrap();
        assert_eq!(format!("{:?}", password), "PlainPassword(***)");
    }
}
