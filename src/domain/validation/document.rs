//! CPF/CNPJ 문서 번호 검증
//!
//! 11자리는 개인 납세자 번호(CPF), 14자리는 법인 번호(CNPJ)로 취급하며
//! 두 개의 검증 숫자를 가중합 mod 11 방식으로 계산해 비교합니다.

use super::{ErrorKind, FieldResult, ValidationFailure};

const CPF_LENGTH: usize = 11;
const CNPJ_LENGTH: usize = 14;

const CPF_FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const CPF_SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// 문서 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// 개인 (11자리)
    Cpf,
    /// 법인 (14자리)
    Cnpj,
}

/// 검증을 통과한 문서 번호
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNumber {
    kind: DocumentKind,
    digits: String,
}

impl DocumentNumber {
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn into_inner(self) -> String {
        self.digits
    }
}

/// CPF 또는 CNPJ 번호를 검증합니다.
///
/// 길이로 종류를 판별한 뒤, 같은 숫자만 반복되는 번호를 먼저 거부하고
/// 두 검증 숫자를 계산해 입력의 마지막 두 자리와 비교합니다.
///
/// # Errors
///
/// * `ErrorKind::InvalidDocument` - 길이가 11/14가 아니거나, 숫자가 아닌 문자가 있거나,
///   반복 숫자이거나, 검증 숫자가 일치하지 않는 경우
///
/// # Examples
///
/// ```rust,ignore
/// assert!(validate_document("88877936037").is_ok());
/// assert!(validate_document("00000000000").is_err());
/// ```
pub fn validate_document(value: &str) -> FieldResult<DocumentNumber> {
    let kind = match value.len() {
        CPF_LENGTH => DocumentKind::Cpf,
        CNPJ_LENGTH => DocumentKind::Cnpj,
        _ => {
            return Err(ValidationFailure::new(
                ErrorKind::InvalidDocument,
                "CPF/CNPJ 길이가 올바르지 않습니다",
            ));
        }
    };

    let valid = match parse_digits(value) {
        Some(digits) if !is_repeated_sequence(&digits) => match kind {
            DocumentKind::Cpf => {
                has_valid_check_digits(&digits, &CPF_FIRST_WEIGHTS, &CPF_SECOND_WEIGHTS)
            }
            DocumentKind::Cnpj => {
                has_valid_check_digits(&digits, &CNPJ_FIRST_WEIGHTS, &CNPJ_SECOND_WEIGHTS)
            }
        },
        _ => false,
    };

    if !valid {
        let detail = match kind {
            DocumentKind::Cpf => "유효하지 않은 CPF입니다",
            DocumentKind::Cnpj => "유효하지 않은 CNPJ입니다",
        };
        return Err(ValidationFailure::new(ErrorKind::InvalidDocument, detail));
    }

    Ok(DocumentNumber {
        kind,
        digits: value.to_string(),
    })
}

fn parse_digits(value: &str) -> Option<Vec<u32>> {
    value.chars().map(|c| c.to_digit(10)).collect()
}

fn is_repeated_sequence(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

fn has_valid_check_digits(digits: &[u32], first_weights: &[u32], second_weights: &[u32]) -> bool {
    let first = check_digit(&digits[..first_weights.len()], first_weights);
    let second = check_digit(&digits[..second_weights.len()], second_weights);

    digits[first_weights.len()] == first && digits[second_weights.len()] == second
}

/// 가중합 mod 11 검증 숫자 (나머지 0, 1 → 0, 그 외 11 - 나머지)
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        remainder => 11 - remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(value: &str) {
        let err = validate_document(value).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDocument, "{value} should be rejected");
    }

    #[test]
    fn test_valid_cpf() {
        let document = validate_document("88877936037").unwrap();
        assert_eq!(document.kind(), DocumentKind::Cpf);
        assert_eq!(document.into_inner(), "88877936037");
    }

    #[test]
    fn test_invalid_cpf() {
        assert_invalid("12345678901");
        // 마지막 검증 숫자만 틀린 경우
        assert_invalid("88877936036");
        // 첫 번째 검증 숫자만 틀린 경우
        assert_invalid("88877936047");
    }

    #[test]
    fn test_repeated_digits_are_rejected() {
        for digit in 0..=9 {
            assert_invalid(&digit.to_string().repeat(CPF_LENGTH));
            assert_invalid(&digit.to_string().repeat(CNPJ_LENGTH));
        }
    }

    #[test]
    fn test_valid_cnpj() {
        let document = validate_document("11222333000181").unwrap();
        assert_eq!(document.kind(), DocumentKind::Cnpj);
        assert_eq!(document.into_inner(), "11222333000181");
    }

    #[test]
    fn test_invalid_cnpj() {
        assert_invalid("11222333000182");
        assert_invalid("12345678912345");
    }

    #[test]
    fn test_other_lengths_are_rejected() {
        assert_invalid("");
        assert_invalid("8887793603");
        assert_invalid("888779360370");
        assert_invalid("1122233300018");
        assert_invalid("112223330001810");

        let err = validate_document("123").unwrap_err();
        assert_eq!(err.detail, "CPF/CNPJ 길이가 올바르지 않습니다");
    }

    #[test]
    fn test_non_digit_characters_are_rejected() {
        assert_invalid("888.779.360");
        assert_invalid("8887793603a");
        assert_invalid("11.222.333/01");
    }

    #[test]
    fn test_detail_names_document_kind() {
        assert_eq!(
            validate_document("12345678901").unwrap_err().detail,
            "유효하지 않은 CPF입니다"
        );
        assert_eq!(
            validate_document("00000000000000").unwrap_err().detail,
            "유효하지 않은 CNPJ입니다"
        );
    }

    #[test]
    fn test_check_digit_remainder_mapping() {
        // 합계 22 → 나머지 0 → 0
        assert_eq!(check_digit(&[1, 1], &[11, 11]), 0);
        // 합계 12 → 나머지 1 → 0
        assert_eq!(check_digit(&[6], &[2]), 0);
        // 합계 382 → 나머지 8 → 3
        assert_eq!(check_digit(&[8, 8, 8, 7, 7, 9, 3, 6, 0], &CPF_FIRST_WEIGHTS), 3);
    }
}
