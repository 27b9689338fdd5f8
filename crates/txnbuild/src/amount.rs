//! Fixed-point amount codec.
//!
//! Amounts travel as decimal strings with at most seven fractional digits
//! and live on the wire as scaled signed 64-bit integers. The round trip
//! `parse(to_string(v)) == v` is exact for every representable value.

/// Scaled units per whole unit of an asset.
pub const ONE: i64 = 10_000_000;

const PRECISION: usize = 7;

/// Amount parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount string is empty")]
    Empty,
    #[error("amount must not be negative")]
    Negative,
    #[error("invalid decimal amount")]
    Malformed,
    #[error("amount has more than 7 fractional digits")]
    TooManyFractionalDigits,
    #[error("amount does not fit in the 64-bit range")]
    Overflow,
}

/// Parses a non-negative decimal string into scaled units.
pub fn parse(s: &str) -> Result<i64, AmountError> {
    if s.is_empty() {
        return Err(AmountError::Empty);
    }
    if s.starts_with('-') {
        return Err(AmountError::Negative);
    }
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(AmountError::Malformed);
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AmountError::Malformed);
    }
    if frac_part.len() > PRECISION {
        return Err(AmountError::TooManyFractionalDigits);
    }
    let mut value: i64 = 0;
    for b in int_part.bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as i64))
            .ok_or(AmountError::Overflow)?;
    }
    value = value.checked_mul(ONE).ok_or(AmountError::Overflow)?;
    let mut frac: i64 = 0;
    for b in frac_part.bytes() {
        frac = frac * 10 + (b - b'0') as i64;
    }
    for _ in frac_part.len()..PRECISION {
        frac *= 10;
    }
    value.checked_add(frac).ok_or(AmountError::Overflow)
}

/// Renders scaled units as a decimal string with exactly seven fractional
/// digits (the canonical form).
pub fn to_string(units: i64) -> String {
    let value = units as i128;
    let (sign, abs) = if value < 0 { ("-", -value) } else { ("", value) };
    format!("{}{}.{:07}", sign, abs / ONE as i128, abs % ONE as i128)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_units() {
        assert_eq!(parse("100").unwrap(), 1_000_000_000);
        assert_eq!(parse("100.0000000").unwrap(), 1_000_000_000);
        assert_eq!(parse("0").unwrap(), 0);
    }

    #[test]
    fn parse_fractional() {
        assert_eq!(parse("0.0000001").unwrap(), 1);
        assert_eq!(parse("1.5").unwrap(), 15_000_000);
        assert_eq!(parse(".5").unwrap(), 5_000_000);
    }

    #[test]
    fn parse_max_value() {
        // i64::MAX scaled down: 922337203685.4775807
        assert_eq!(parse("922337203685.4775807").unwrap(), i64::MAX);
        assert_eq!(parse("922337203685.4775808").unwrap_err(), AmountError::Overflow);
    }

    #[test]
    fn parse_rejections() {
        assert_eq!(parse("").unwrap_err(), AmountError::Empty);
        assert_eq!(parse("-1").unwrap_err(), AmountError::Negative);
        assert_eq!(parse("1.23456789").unwrap_err(), AmountError::TooManyFractionalDigits);
        assert_eq!(parse("12a").unwrap_err(), AmountError::Malformed);
        assert_eq!(parse("1.2.3").unwrap_err(), AmountError::Malformed);
        assert_eq!(parse(".").unwrap_err(), AmountError::Malformed);
        assert_eq!(parse("+1").unwrap_err(), AmountError::Malformed);
        assert_eq!(parse("99999999999999999999").unwrap_err(), AmountError::Overflow);
    }

    #[test]
    fn format_is_canonical() {
        assert_eq!(to_string(1_000_000_000), "100.0000000");
        assert_eq!(to_string(1), "0.0000001");
        assert_eq!(to_string(0), "0.0000000");
        assert_eq!(to_string(i64::MAX), "922337203685.4775807");
    }

    #[test]
    fn format_handles_negative_wire_values() {
        assert_eq!(to_string(-15_000_000), "-1.5000000");
        assert_eq!(to_string(i64::MIN), "-922337203685.4775808");
    }

    #[test]
    fn roundtrip_law() {
        for v in [0i64, 1, 9_999_999, 10_000_000, 123_456_789, i64::MAX] {
            assert_eq!(parse(&to_string(v)).unwrap(), v);
        }
    }
}
