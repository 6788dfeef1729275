//! 사람 이름 형식 검증
//!
//! 라틴 문자(é, à, ë, ç 포함), 공백, 하이픈, 아포스트로피만 허용합니다.
//! 대소문자 변환 등 정규화는 하지 않고 입력을 그대로 돌려줍니다.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ErrorKind, FieldResult, ValidationFailure};

/// 허용 문자 집합과 2-50자 길이 제한
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zéàëç \-']{2,50}$").expect("이름 정규식이 올바르지 않습니다"));

/// 연속된 공백 문자
static REPEATED_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("공백 정규식이 올바르지 않습니다"));

const FORBIDDEN_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// 이름 형식을 검증합니다.
///
/// 외부 스키마의 7-100자 제한과 별개로 이 검증기는 2-50자를 요구하며,
/// 두 제한은 동시에 적용됩니다.
///
/// # Errors
///
/// * `ErrorKind::InvalidName` - 숫자, 특수문자, 연속 밑줄/공백이 있거나 길이가 범위를 벗어난 경우
pub fn validate_name(value: &str) -> FieldResult<String> {
    let has_forbidden = value
        .chars()
        .any(|c| c.is_ascii_digit() || FORBIDDEN_CHARS.contains(&c));

    if has_forbidden
        || value.contains("__")
        || REPEATED_WHITESPACE.is_match(value)
        || !NAME_PATTERN.is_match(value)
    {
        return Err(ValidationFailure::new(
            ErrorKind::InvalidName,
            "유효하지 않은 이름입니다. 알파벳, 공백, 하이픈, 아포스트로피만 사용할 수 있습니다",
        ));
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert_eq!(validate_name("Lucas Camargo").unwrap(), "Lucas Camargo");
        assert_eq!(validate_name("Anne-Marie O'Neil").unwrap(), "Anne-Marie O'Neil");
        assert_eq!(validate_name("Françoise Léa").unwrap(), "Françoise Léa");
    }

    #[test]
    fn test_name_is_not_title_cased() {
        assert_eq!(validate_name("lucas camargo").unwrap(), "lucas camargo");
    }

    #[test]
    fn test_invalid_names() {
        for value in [
            "Lucas123",
            "Maria  ",
            " joão",
            "Lucas  Camargo",
            "Lucas_Camargo",
            "Lucas@Camargo",
            "Lucas.Camargo",
            "A",
            "",
        ] {
            let err = validate_name(value).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidName, "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_length_bounds_count_characters() {
        assert!(validate_name(&"é".repeat(50)).is_ok());
        assert!(validate_name(&"a".repeat(51)).is_err());
        assert!(validate_name("Al").is_ok());
    }
}
