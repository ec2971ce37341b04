//! Amortization data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters of a SAC simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Principal being financed.
    pub financed_amount: Decimal,
    /// Annual interest rate as a percentage (12 means 12%).
    pub annual_interest_rate_percent: Decimal,
    /// Number of monthly installments (1-480).
    pub installment_count: i32,
}

impl SimulationRequest {
    /// Creates a new simulation request.
    #[must_use]
    pub const fn new(
        financed_amount: Decimal,
        annual_interest_rate_percent: Decimal,
        installment_count: i32,
    ) -> Self {
        Self {
            financed_amount,
            annual_interest_rate_percent,
            installment_count,
        }
    }
}

/// A single row of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installment {
    /// 1-based sequence number.
    pub index: u32,
    /// Principal repaid in this installment (constant across the schedule).
    pub amortization: Decimal,
    /// Interest on the balance outstanding before this installment.
    pub interest: Decimal,
    /// Amortization plus interest.
    pub payment_amount: Decimal,
    /// Balance after this installment, floored at zero.
    pub remaining_balance: Decimal,
    /// Interest paid through this installment.
    pub cumulative_interest: Decimal,
    /// Principal repaid through this installment.
    pub cumulative_amortization: Decimal,
}

/// Complete SAC schedule with totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Principal being financed.
    pub financed_amount: Decimal,
    /// Annual interest rate as a percentage.
    pub annual_interest_rate_percent: Decimal,
    /// Flat monthly rate (annual / 100 / 12).
    pub monthly_interest_rate: Decimal,
    /// Number of installments.
    pub installment_count: i32,
    /// Constant principal portion of each installment.
    pub amortization_amount: Decimal,
    /// Sum of all interest.
    pub total_interest: Decimal,
    /// Financed amount plus total interest.
    pub total_payable: Decimal,
    /// Installments in schedule order.
    pub installments: Vec<Installment>,
}

impl SimulationResult {
    /// Returns the first installment, which carries the highest payment.
    #[must_use]
    pub fn first_installment(&self) -> Option<&Installment> {
        self.installments.first()
    }

    /// Returns the last installment, which carries the lowest payment.
    #[must_use]
    pub fn last_installment(&self) -> Option<&Installment> {
        self.installments.last()
    }
}
