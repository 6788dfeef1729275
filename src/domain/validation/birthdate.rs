//! 생년월일(최소 나이) 검증

use chrono::{Datelike, Local, NaiveDate};

use super::{ErrorKind, FieldResult, ValidationFailure};

/// 가입 가능한 최소 나이 기본값
pub const DEFAULT_MINIMUM_AGE: u32 = 14;

/// 기준일 기준 만 나이를 계산합니다.
///
/// 연도 차이에서, 기준일의 (월, 일)이 생일의 (월, 일)보다 앞서면 1을 뺍니다.
/// 생년월일이 기준일 이후인 경우 음수가 됩니다.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let before_birthday = (today.month(), today.day()) < (birthdate.month(), birthdate.day());
    today.year() - birthdate.year() - i32::from(before_birthday)
}

/// 주어진 기준일로 최소 나이를 검증합니다.
///
/// # Errors
///
/// * `ErrorKind::Underage` - 만 나이가 `minimum_age` 미만인 경우 (미래 날짜 포함)
pub fn validate_birthdate_on(
    birthdate: NaiveDate,
    today: NaiveDate,
    minimum_age: u32,
) -> FieldResult<NaiveDate> {
    let age = age_on(birthdate, today);

    if i64::from(age) < i64::from(minimum_age) {
        return Err(ValidationFailure::new(
            ErrorKind::Underage,
            format!("사용자는 최소 {}세 이상이어야 합니다", minimum_age),
        ));
    }

    Ok(birthdate)
}

/// 오늘(로컬 날짜) 기준으로 기본 최소 나이(14세)를 검증합니다.
pub fn validate_birthdate(birthdate: NaiveDate) -> FieldResult<NaiveDate> {
    validate_birthdate_on(birthdate, Local::now().date_naive(), DEFAULT_MINIMUM_AGE)
}
