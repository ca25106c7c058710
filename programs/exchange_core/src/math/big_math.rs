//! # exchange_core::math::big_math
//!
//! Extended-precision arithmetic primitives backing the offer-crossing core.
//!
//! ## Features
//! - Full 128-bit products of 64-bit quantities with no intermediate loss.
//! - `A * B / C` and 128-bit-dividend division with directed rounding,
//!   computed in `U256` where the ceiling adjustment cannot overflow.
//! - Explicit narrowing back to `i64` with overflow detection; a quotient
//!   that does not fit is reported, never truncated.
//!
//! ## Safety & Determinism
//! - Data-dependent overflow surfaces as `None` from the `checked_*`
//!   variants and as `ExchangeError::Overflow` from the `Result` wrappers.
//! - Domain preconditions (nonnegative operands, positive divisors) are
//!   caller bugs and are assertion-checked.

use crate::error::ExchangeError;
use anchor_lang::prelude::*;
use ethnum::U256;

/// Rounding direction for the division primitives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rounding {
    Down,
    Up,
}

// ---------- 128-bit products ------------------------------------------------

/// Multiplies two nonnegative 64-bit quantities into a full 128-bit product.
#[inline(always)]
pub fn big_multiply(a: i64, b: i64) -> u128 {
    assert!(a >= 0 && b >= 0);
    (a as u128) * (b as u128)
}

// ---------- Directed division with checked narrowing ------------------------

#[inline(always)]
fn div_round(dividend: U256, divisor: U256, rounding: Rounding) -> U256 {
    match rounding {
        Rounding::Down => dividend / divisor,
        Rounding::Up => (dividend + divisor - U256::ONE) / divisor,
    }
}

#[inline(always)]
fn narrow_to_i64(x: U256) -> Option<i64> {
    if x > U256::from(i64::MAX as u64) {
        return None;
    }
    Some(x.as_u64() as i64)
}

/// Computes `a * b / c` with the requested rounding.
///
/// Returns `None` when the rounded quotient does not fit in a signed
/// 64-bit value. Preconditions: `a >= 0`, `b >= 0`, `c > 0`.
#[inline(always)]
pub fn checked_big_divide(a: i64, b: i64, c: i64, rounding: Rounding) -> Option<i64> {
    assert!(a >= 0 && b >= 0 && c > 0);
    let dividend = U256::from(a as u64) * U256::from(b as u64);
    narrow_to_i64(div_round(dividend, U256::from(c as u64), rounding))
}

/// Computes `a / b` for a 128-bit dividend with the requested rounding.
///
/// Returns `None` when the rounded quotient does not fit in a signed
/// 64-bit value. The U256 intermediate makes the ceiling adjustment
/// `a + b - 1` total for every `u128` dividend; a dividend large enough
/// to have needed the wider headroom always narrows above `i64::MAX` and
/// is reported the same way. Precondition: `b > 0`.
#[inline(always)]
pub fn checked_big_divide_128(a: u128, b: i64, rounding: Rounding) -> Option<i64> {
    assert!(b > 0);
    narrow_to_i64(div_round(U256::from(a), U256::from(b as u64), rounding))
}

/// `checked_big_divide` with overflow mapped to `ExchangeError::Overflow`.
///
/// The crossing core calls this at sites where the branch algebra proves
/// the quotient fits; an error here indicates a bug upstream.
#[inline(always)]
pub fn big_divide(a: i64, b: i64, c: i64, rounding: Rounding) -> Result<i64> {
    Ok(checked_big_divide(a, b, c, rounding).ok_or(ExchangeError::Overflow)?)
}

/// `checked_big_divide_128` with overflow mapped to `ExchangeError::Overflow`.
#[inline(always)]
pub fn big_divide_128(a: u128, b: i64, rounding: Rounding) -> Result<i64> {
    Ok(checked_big_divide_128(a, b, rounding).ok_or(ExchangeError::Overflow)?)
}
