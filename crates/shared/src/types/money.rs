//! Money rounding and formatting for display layers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Calculations keep full `rust_decimal::Decimal` precision; only
//! presentation code (tables, CSV) rounds through these helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fraction digits shown for money amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to cents, midpoints away from zero.
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two fraction digits, e.g. `"1100.00"`.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(MONEY_DECIMAL_PLACES);
    rounded.to_string()
}
