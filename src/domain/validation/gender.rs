//! 성별 코드 검증 (`M`, `F`, `O`)

use serde::{Deserialize, Serialize};

use super::{ErrorKind, FieldResult, ValidationFailure};

/// 성별 코드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenderCode {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "O")]
    Other,
}

/// 성별 코드를 검증합니다. 대소문자를 구분하며 소문자 정규화는 하지 않습니다.
///
/// 값이 없거나(`None`) 빈 문자열, 두 글자 이상인 경우 모두 `InvalidGenderCode`입니다.
pub fn validate_gender(value: Option<&str>) -> FieldResult<GenderCode> {
    match value {
        Some("M") => Ok(GenderCode::Male),
        Some("F") => Ok(GenderCode::Female),
        Some("O") => Ok(GenderCode::Other),
        _ => Err(ValidationFailure::new(
            ErrorKind::InvalidGenderCode,
            "유효하지 않은 성별 코드입니다. 'M'(남성), 'F'(여성), 'O'(기타) 중 하나여야 합니다",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_codes() {
        assert_eq!(validate_gender(Some("M")).unwrap(), GenderCode::Male);
        assert_eq!(validate_gender(Some("F")).unwrap(), GenderCode::Female);
        assert_eq!(validate_gender(Some("O")).unwrap(), GenderCode::Other);
    }

    #[test]
    fn test_rejected_codes() {
        for value in [Some("m"), Some("Male"), Some(""), Some("MF"), Some(" M"), None] {
            let err = validate_gender(value).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidGenderCode, "{value:?} should be rejected");
        }
    }

    #[test]
    fn test_serialized_as_single_letter() {
        assert_eq!(serde_json::to_string(&GenderCode::Other).unwrap(), "\"O\"");
    }
}
