//! # exchange_core::math::exchange
//!
//! Integer crossing engine for two standing offers on a limit order book.
//!
//! The two sides are named for the assets they move: the resident offer
//! sells wheat and receives sheep, the incoming offer sells sheep and
//! receives wheat. A price is the unreduced rational `n / d` in sheep per
//! wheat. Given the four transfer limits and a rounding regime, the engine
//! computes the exact integer quantities to move in each direction and
//! which offer survives as a partial fill.
//!
//! ## Guarantees
//! - A single consistent rule decides which of the two offers is larger;
//!   the smaller offer is always consumed and removed from the book.
//! - Rounding error always favors the offer that remains in the book.
//! - Under [`RoundingType::Normal`] neither party realizes a price more
//!   than 1% worse than the crossed price; if rounding would exceed that,
//!   no trade occurs. The path-payment regimes relax the bound in the
//!   direction favoring the resident wheat offer, because a payment
//!   carries its own overall send or receive limit that decides whether
//!   the final effective price is acceptable.
//!
//! All arithmetic is exact in 128 bits; every narrowing back to 64 bits is
//! overflow-checked.

use crate::error::ExchangeError;
use crate::math::big_math::{big_divide, big_divide_128, big_multiply, Rounding};
use anchor_lang::prelude::*;

/// A limit price quoted as the rational `n / d`, in units of sheep per
/// unit of wheat.
///
/// Both components are strictly positive. The fraction is never reduced:
/// `2/4` and `1/2` are distinct prices to this engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Price {
    pub n: i32,
    pub d: i32,
}

/// Rounding regime for a crossing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundingType {
    /// Book-order crossing with the symmetric 1% price-error threshold.
    Normal,
    /// Routed payment fixing the amount sent; the wheat seller may be
    /// favored without bound.
    PathPaymentStrictSend,
    /// Routed payment fixing the amount received; the wheat seller may be
    /// favored without bound.
    PathPaymentStrictReceive,
}

/// Outcome of crossing two offers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExchangeResult {
    /// Wheat transferred from the resident offer to the incoming one.
    pub wheat_received: i64,
    /// Sheep transferred from the incoming offer to the resident one.
    pub sheep_sent: i64,
    /// True when the resident wheat offer is the larger side and its
    /// remainder stays on the book.
    pub wheat_stays: bool,
}

// Rescales one side's effective size into a common unit after applying
// both of its limits. With the price oriented as the caller passes it,
//     min(max_send * price_n, max_receive * price_d)
// is the offer's size in sheep scaled by the price denominator, so the two
// sides' values are directly comparable and the larger value identifies
// the larger offer.
pub(crate) fn calculate_offer_value(
    price_n: i32,
    price_d: i32,
    max_send: i64,
    max_receive: i64,
) -> u128 {
    let send_value = big_multiply(max_send, i64::from(price_n));
    let receive_value = big_multiply(max_receive, i64::from(price_d));
    send_value.min(receive_value)
}

/// Checks that the relative error between the crossed price and the
/// effective price `sheep_send / wheat_receive` does not exceed 1%.
///
/// With `can_favor_wheat` the check is asymmetric: error favoring the
/// wheat seller passes unconditionally, while error favoring the sheep
/// seller is still capped at 1%. Path payments rely on the asymmetric
/// form; their own send limit bounds how far the wheat seller can be
/// favored in practice.
pub fn check_price_error_bound(
    price: Price,
    wheat_receive: i64,
    sheep_send: i64,
    can_favor_wheat: bool,
) -> bool {
    // With K = 100 for a 1% threshold, the relative-error condition
    //     |price - eff_price| <= price / K
    // clears denominators into the exact integer form
    //     |K * n * wheat_receive - K * d * sheep_send| <= n * wheat_receive
    // None of the products overflow 128 bits since n and d are 32-bit.
    let err_n = 100 * i64::from(price.n);
    let err_d = 100 * i64::from(price.d);

    let lhs = big_multiply(err_n, wheat_receive);
    let rhs = big_multiply(err_d, sheep_send);

    if can_favor_wheat && rhs > lhs {
        return true;
    }

    let abs_diff = if lhs > rhs { lhs - rhs } else { rhs - lhs };
    abs_diff <= big_multiply(i64::from(price.n), wheat_receive)
}

// The five rounding configurations a crossing can take, one per row of the
// case analysis below. Keeping them as a closed enumeration makes the
// coverage obligation explicit: a new rounding regime or price direction
// must pick a row in `select_branch` and a computation in the match that
// consumes it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CrossingBranch {
    /// Wheat stays under strict-send: the incoming side sends everything
    /// both sheep limits allow, wheat received is floored against the
    /// sheep value.
    WheatStaysStrictSend,
    /// Wheat stays, and wheat is the more valuable asset or the crossing
    /// is strict-receive: wheat received is floored against the sheep
    /// value, sheep sent is derived from it rounded up.
    WheatStaysRoundSheepUp,
    /// Wheat stays with sheep at least as valuable (normal mode): sheep
    /// sent is floored against the sheep value, wheat received is derived
    /// from it rounded down.
    WheatStaysRoundWheatDown,
    /// Sheep stays with wheat more valuable: wheat received is floored
    /// against the wheat value, sheep sent is derived from it rounded
    /// down.
    SheepStaysRoundSheepDown,
    /// Sheep stays with sheep at least as valuable: sheep sent is floored
    /// against the wheat value, wheat received is derived from it rounded
    /// up.
    SheepStaysRoundWheatUp,
}

fn select_branch(wheat_stays: bool, price: Price, round: RoundingType) -> CrossingBranch {
    if wheat_stays {
        match round {
            RoundingType::PathPaymentStrictSend => CrossingBranch::WheatStaysStrictSend,
            RoundingType::PathPaymentStrictReceive => CrossingBranch::WheatStaysRoundSheepUp,
            RoundingType::Normal if price.n > price.d => CrossingBranch::WheatStaysRoundSheepUp,
            RoundingType::Normal => CrossingBranch::WheatStaysRoundWheatDown,
        }
    } else if price.n > price.d {
        CrossingBranch::SheepStaysRoundSheepDown
    } else {
        CrossingBranch::SheepStaysRoundWheatUp
    }
}

/// Computes the raw crossing quantities before the price-error threshold
/// policy is applied.
///
/// Residence is decided first: with
///     wheat_value = min(max_wheat_send * n, max_sheep_receive * d)
///     sheep_value = min(max_sheep_send * d, max_wheat_receive * n)
/// both values measure the respective offer in the same rescaled unit, so
/// `wheat_stays = wheat_value > sheep_value` names the larger offer. The
/// quantities are then derived with branch-specific rounding such that
///
/// - both outputs stay within `min(send limit, receive limit)` for their
///   side, and
/// - the realized price `sheep_sent / wheat_received` is biased toward
///   the staying side: at least `n / d` when wheat stays, at most `n / d`
///   when sheep stays.
///
/// Each division is exact in 128-bit space and its quotient is bounded by
/// one of the 64-bit limits, so the overflow checks inside cannot fire on
/// inputs satisfying the preconditions. The bounds are still re-checked
/// before returning; a breach means the branch table itself is wrong and
/// surfaces as an error rather than a bad trade.
pub fn exchange_v10_without_price_error_thresholds(
    price: Price,
    max_wheat_send: i64,
    max_wheat_receive: i64,
    max_sheep_send: i64,
    max_sheep_receive: i64,
    round: RoundingType,
) -> Result<ExchangeResult> {
    assert!(price.n > 0 && price.d > 0);
    assert!(max_wheat_send >= 0 && max_wheat_receive >= 0);
    assert!(max_sheep_send >= 0 && max_sheep_receive >= 0);

    let wheat_value = calculate_offer_value(price.n, price.d, max_wheat_send, max_sheep_receive);
    let sheep_value = calculate_offer_value(price.d, price.n, max_sheep_send, max_wheat_receive);
    let wheat_stays = wheat_value > sheep_value;

    let n = i64::from(price.n);
    let d = i64::from(price.d);

    let (wheat_receive, sheep_send) = match select_branch(wheat_stays, price, round) {
        CrossingBranch::WheatStaysStrictSend => {
            // sheep_value <= max_wheat_receive * n and sheep_value <
            // wheat_value <= max_wheat_send * n, so the floored quotient
            // respects both wheat limits. The sheep side sends its full
            // capacity; a strict-send payment crossing its final offer must
            // exhaust what it can send.
            let wheat_receive = big_divide_128(sheep_value, n, Rounding::Down)?;
            (wheat_receive, max_sheep_send.min(max_sheep_receive))
        }
        CrossingBranch::WheatStaysRoundSheepUp => {
            // wheat_receive = floor(sheep_value / n) respects both wheat
            // limits as above. Deriving sheep_send upward gives
            //     sheep_send / wheat_receive >= n / d
            // favoring the staying wheat offer, while
            //     ceil(wheat_receive * n / d) <= ceil(sheep_value / d)
            // keeps both sheep limits.
            let wheat_receive = big_divide_128(sheep_value, n, Rounding::Down)?;
            let sheep_send = big_divide(wheat_receive, n, d, Rounding::Up)?;
            (wheat_receive, sheep_send)
        }
        CrossingBranch::WheatStaysRoundWheatDown => {
            // sheep_send = floor(sheep_value / d) respects both sheep
            // limits. Deriving wheat_receive downward gives
            //     sheep_send / wheat_receive >= n / d
            // again favoring the staying wheat offer, and
            //     floor(sheep_send * d / n) <= sheep_value / n
            // keeps both wheat limits.
            let sheep_send = big_divide_128(sheep_value, d, Rounding::Down)?;
            let wheat_receive = big_divide(sheep_send, d, n, Rounding::Down)?;
            (wheat_receive, sheep_send)
        }
        CrossingBranch::SheepStaysRoundSheepDown => {
            // Mirror image of the staying-wheat cases: both quantities are
            // floored so that
            //     sheep_send / wheat_receive <= n / d
            // and the staying sheep offer is the favored one.
            let wheat_receive = big_divide_128(wheat_value, n, Rounding::Down)?;
            let sheep_send = big_divide(wheat_receive, n, d, Rounding::Down)?;
            (wheat_receive, sheep_send)
        }
        CrossingBranch::SheepStaysRoundWheatUp => {
            // sheep_send = floor(wheat_value / d) respects both sheep
            // limits; rounding wheat_receive up keeps the realized price at
            // or below n / d while ceil(wheat_value / n) still fits both
            // wheat limits.
            let sheep_send = big_divide_128(wheat_value, d, Rounding::Down)?;
            let wheat_receive = big_divide(sheep_send, d, n, Rounding::Up)?;
            (wheat_receive, sheep_send)
        }
    };

    if wheat_receive < 0 || wheat_receive > max_wheat_send.min(max_wheat_receive) {
        return Err(ExchangeError::WheatReceiveOutOfBounds.into());
    }
    if sheep_send < 0 || sheep_send > max_sheep_send.min(max_sheep_receive) {
        return Err(ExchangeError::SheepSendOutOfBounds.into());
    }

    Ok(ExchangeResult {
        wheat_received: wheat_receive,
        sheep_sent: sheep_send,
        wheat_stays,
    })
}

/// Applies the rounding-regime price policy to a raw crossing result.
///
/// For a non-zero trade the side-favoring invariant is re-verified first:
/// the staying side must not have been disfavored by rounding. Under
/// [`RoundingType::Normal`] a trade outside the symmetric 1% band is
/// replaced by a zero trade; the caller removes the smaller offer without
/// any transfer. Under the path-payment regimes the asymmetric bound must
/// hold because offers are adjusted before crossing, and a violation is an
/// error.
///
/// For a zero quantity on either side, strict-send requires that at least
/// one sheep unit moved (sheep for zero wheat is a legal fill there); the
/// other regimes force both quantities to zero, which the crossing algebra
/// already implies.
pub fn apply_price_error_thresholds(
    price: Price,
    wheat_receive: i64,
    sheep_send: i64,
    wheat_stays: bool,
    round: RoundingType,
) -> Result<ExchangeResult> {
    assert!(price.n > 0 && price.d > 0);
    assert!(wheat_receive >= 0 && sheep_send >= 0);

    let mut wheat_receive = wheat_receive;
    let mut sheep_send = sheep_send;

    if wheat_receive > 0 && sheep_send > 0 {
        let wheat_receive_value = big_multiply(wheat_receive, i64::from(price.n));
        let sheep_send_value = big_multiply(sheep_send, i64::from(price.d));

        // The staying side must be the favored one. The crossing cannot
        // produce a violation; a failure here means its branch table was
        // edited out from under this check.
        if wheat_stays && sheep_send_value < wheat_receive_value {
            return Err(ExchangeError::FavoredSheepWhenWheatStays.into());
        }
        if !wheat_stays && sheep_send_value > wheat_receive_value {
            return Err(ExchangeError::FavoredWheatWhenSheepStays.into());
        }

        match round {
            RoundingType::Normal => {
                if !check_price_error_bound(price, wheat_receive, sheep_send, false) {
                    wheat_receive = 0;
                    sheep_send = 0;
                }
            }
            RoundingType::PathPaymentStrictSend | RoundingType::PathPaymentStrictReceive => {
                // The sheep seller can only be favored when the entire
                // resident offer is taken, and offers are adjusted
                // immediately before crossing so that case satisfies the
                // bound. A violation means the caller crossed an unadjusted
                // offer.
                if !check_price_error_bound(price, wheat_receive, sheep_send, true) {
                    return Err(ExchangeError::PriceErrorBoundExceeded.into());
                }
            }
        }
    } else {
        match round {
            RoundingType::PathPaymentStrictSend => {
                // Selling sheep for no wheat can be required to hit an exact
                // send amount and is bounded by the payment's receive
                // constraint. Sending nothing at all means the caller
                // crossed an offer it should have skipped.
                if sheep_send == 0 {
                    return Err(ExchangeError::NoSheepSent.into());
                }
            }
            _ => {
                // Zero on either side implies zero on both in these
                // regimes; normalize the pair anyway.
                wheat_receive = 0;
                sheep_send = 0;
            }
        }
    }

    Ok(ExchangeResult {
        wheat_received: wheat_receive,
        sheep_sent: sheep_send,
        wheat_stays,
    })
}

/// Crosses two offers and returns the final transferable quantities.
///
/// This is the sole entry point the transaction layer uses; it composes
/// the raw crossing with the threshold policy. A zero trade with
/// `Ok(..)` means no transfer takes place and the smaller offer is
/// removed. An `Err(..)` is a fatal condition: an arithmetic or invariant
/// failure inside the engine, or a path-payment crossing whose
/// preconditions the caller did not establish.
pub fn exchange_v10(
    price: Price,
    max_wheat_send: i64,
    max_wheat_receive: i64,
    max_sheep_send: i64,
    max_sheep_receive: i64,
    round: RoundingType,
) -> Result<ExchangeResult> {
    let raw = exchange_v10_without_price_error_thresholds(
        price,
        max_wheat_send,
        max_wheat_receive,
        max_sheep_send,
        max_sheep_receive,
        round,
    )?;
    apply_price_error_thresholds(price, raw.wheat_received, raw.sheep_sent, raw.wheat_stays, round)
}
