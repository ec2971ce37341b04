//! Common types used across the application.

pub mod money;

pub use money::{MONEY_DECIMAL_PLACES, format_money, round_money};
