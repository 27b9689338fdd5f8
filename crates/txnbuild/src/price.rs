//! Decimal price strings to 32-bit rational wire prices.
//!
//! A price travels on the wire as a numerator/denominator pair of signed
//! 32-bit integers. Parsing converts the exact decimal value to a fraction
//! and walks its continued-fraction convergents, returning the last
//! convergent whose terms both fit in 31 bits.

use lumen_xdr::Price;

use crate::amount;

// Fractional digits beyond this cannot move any representable convergent.
const MAX_FRACTION_DIGITS: usize = 18;

/// Price parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("price string is empty")]
    Empty,
    #[error("invalid decimal price")]
    Malformed,
    #[error("price must be positive")]
    NotPositive,
    #[error("no 32-bit rational approximation of the price exists")]
    Overflow,
}

/// Parses a positive decimal string into a wire price.
pub fn parse(s: &str) -> Result<Price, PriceError> {
    if s.is_empty() {
        return Err(PriceError::Empty);
    }
    if s.starts_with('-') {
        return Err(PriceError::NotPositive);
    }
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(PriceError::Malformed);
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(PriceError::Malformed);
    }
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.len() > MAX_FRACTION_DIGITS {
        return Err(PriceError::Overflow);
    }
    let mut num: i128 = 0;
    for b in int_part.bytes().chain(frac_part.bytes()) {
        num = num
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as i128))
            .ok_or(PriceError::Overflow)?;
    }
    let den = 10i128.pow(frac_part.len() as u32);
    if num == 0 {
        return Err(PriceError::NotPositive);
    }
    best_rational(num, den)
}

/// Best 32-bit rational approximation of `num/den` by continued fractions.
fn best_rational(mut n: i128, mut d: i128) -> Result<Price, PriceError> {
    const MAX: i128 = i32::MAX as i128;
    let (mut p0, mut q0): (i128, i128) = (0, 1);
    let (mut p1, mut q1): (i128, i128) = (1, 0);
    loop {
        let a = n / d;
        let p2 = a * p1 + p0;
        let q2 = a * q1 + q0;
        if p2 > MAX || q2 > MAX {
            // settle for the previous convergent, if there is a usable one
            if q1 == 0 || p1 == 0 {
                return Err(PriceError::Overflow);
            }
            return Ok(Price {
                n: p1 as i32,
                d: q1 as i32,
            });
        }
        let r = n - a * d;
        if r == 0 {
            return Ok(Price {
                n: p2 as i32,
                d: q2 as i32,
            });
        }
        (p0, q0, p1, q1) = (p1, q1, p2, q2);
        (n, d) = (d, r);
    }
}

/// Renders a wire price as a decimal string with seven fractional digits,
/// rounding half away from zero. The denominator must be non-zero.
pub fn to_string(price: &Price) -> String {
    debug_assert!(price.d != 0);
    let n = price.n as i128 * amount::ONE as i128;
    let d = price.d as i128;
    let (q, r) = (n / d, n % d);
    let rounded = if 2 * r.abs() >= d.abs() {
        q + if (n < 0) == (d < 0) { 1 } else { -1 }
    } else {
        q
    };
    amount::to_string(rounded as i64)
}
