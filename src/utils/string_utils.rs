//! # 문자열 유틸리티
//!
//! 경로 파라미터와 환경 변수 문자열을 타입 값으로 변환하는 함수들입니다.

use std::time::Duration;

use crate::core::errors::{AppError, AppResult};

/// 경로 파라미터의 사용자 ID 파싱
///
/// 10진수 부호 없는 정수만 허용합니다. 앞뒤 공백, 부호, 소수점은 모두 거부합니다.
///
/// # 반환값
/// * `Ok(u64)` - 파싱된 ID
/// * `Err(AppError::ValidationError)` - 숫자가 아니거나 범위를 벗어난 경우
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(parse_user_id("42").unwrap(), 42);
/// assert!(parse_user_id("abc").is_err());
/// ```
pub fn parse_user_id(raw: &str) -> AppResult<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::ValidationError("Invalid user ID".to_string()));
    }

    raw.parse::<u64>()
        .map_err(|_| AppError::ValidationError("Invalid user ID".to_string()))
}

/// 기간 문자열 파싱
///
/// `<숫자><단위>` 구간을 하나 이상 이어 붙인 형식(`1m30s`, `1h30m`)을 허용합니다.
/// 숫자는 소수(`1.5s`, `.5s`)일 수 있고, 단위는 `ns`, `us`(`µs`), `ms`, `s`, `m`, `h`입니다.
/// 단위 없는 정수(`30`)는 초로 해석합니다. 음수와 알 수 없는 단위는 `None`입니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(parse_duration("15s"), Some(Duration::from_secs(15)));
/// assert_eq!(parse_duration("1m30s"), Some(Duration::from_secs(90)));
/// assert_eq!(parse_duration("1.5s"), Some(Duration::from_millis(1500)));
/// assert_eq!(parse_duration("soon"), None);
/// ```
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse::<u64>().ok().map(Duration::from_secs);
    }

    let mut rest = value.strip_prefix('+').unwrap_or(value);
    if rest.is_empty() {
        return None;
    }

    let mut total_nanos: u128 = 0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_end);
        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);

        let unit_nanos: u128 = match unit {
            "ns" => 1,
            "us" | "µs" | "μs" => 1_000,
            "ms" => 1_000_000,
            "s" => 1_000_000_000,
            "m" => 60_000_000_000,
            "h" => 3_600_000_000_000,
            _ => return None,
        };

        total_nanos = total_nanos.checked_add(segment_nanos(number, unit_nanos)?)?;
        rest = tail;
    }

    u64::try_from(total_nanos).ok().map(Duration::from_nanos)
}

/// `1.5` 같은 숫자 구간을 주어진 단위의 나노초로 변환합니다. 단위보다 작은 자릿수는 버립니다.
fn segment_nanos(number: &str, unit_nanos: u128) -> Option<u128> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(unit_nanos)?;

    let mut scale = unit_nanos;
    for digit in fraction.bytes() {
        scale /= 10;
        if scale == 0 {
            break;
        }
        nanos += u128::from(digit - b'0') * scale;
    }

    Some(nanos)
}
