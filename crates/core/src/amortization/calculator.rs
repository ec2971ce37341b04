//! SAC schedule calculator.
//!
//! Principal is repaid in equal parts; interest accrues monthly on the
//! outstanding balance, so payments decrease over the life of the loan.

use rust_decimal::Decimal;

use super::error::AmortizationError;
use super::types::{Installment, SimulationRequest, SimulationResult};

/// Maximum number of installments (40 years of monthly payments).
pub const MAX_INSTALLMENTS: i32 = 480;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Produces an amortization schedule from simulation parameters.
///
/// Implementations must be stateless so one instance can serve concurrent
/// requests.
pub trait ScheduleCalculator: Send + Sync {
    /// Computes the full schedule.
    ///
    /// # Errors
    ///
    /// Returns a validation variant of `AmortizationError` for invalid
    /// parameters, or `AmortizationError::ArithmeticOverflow` if a value
    /// leaves the decimal range.
    fn compute(&self, request: &SimulationRequest) -> Result<SimulationResult, AmortizationError>;
}

/// Validates simulation parameters.
///
/// Rules are checked in a fixed order and the first violation is returned:
/// amount, rate, installment count lower bound, installment count upper bound.
///
/// # Errors
///
/// Returns the `AmortizationError` for the first violated rule.
pub fn validate(request: &SimulationRequest) -> Result<(), AmortizationError> {
    if request.financed_amount <= Decimal::ZERO {
        return Err(AmortizationError::NonPositiveAmount);
    }

    if request.annual_interest_rate_percent < Decimal::ZERO {
        return Err(AmortizationError::NegativeInterestRate);
    }

    if request.installment_count <= 0 {
        return Err(AmortizationError::NonPositiveInstallmentCount);
    }

    if request.installment_count > MAX_INSTALLMENTS {
        return Err(AmortizationError::InstallmentCountExceeded {
            max: MAX_INSTALLMENTS,
        });
    }

    Ok(())
}

/// Computes a SAC schedule with the default calculator.
///
/// # Errors
///
/// See [`ScheduleCalculator::compute`].
pub fn compute(request: &SimulationRequest) -> Result<SimulationResult, AmortizationError> {
    SacCalculator.compute(request)
}

/// Calculator for the Constant Amortization System.
#[derive(Debug, Clone, Copy, Default)]
pub struct SacCalculator;

impl SacCalculator {
    /// Creates a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Converts an annual percentage into a flat monthly rate.
    ///
    /// `12` (percent per year) becomes `0.01` per month. Not compounded.
    #[must_use]
    pub fn monthly_rate(annual_interest_rate_percent: Decimal) -> Decimal {
        annual_interest_rate_percent / Decimal::ONE_HUNDRED / MONTHS_PER_YEAR
    }

    /// Splits the financed amount into equal principal parts.
    ///
    /// `installment_count` must be positive.
    #[must_use]
    pub fn amortization_amount(financed_amount: Decimal, installment_count: u32) -> Decimal {
        financed_amount / Decimal::from(installment_count)
    }
}

impl ScheduleCalculator for SacCalculator {
    fn compute(&self, request: &SimulationRequest) -> Result<SimulationResult, AmortizationError> {
        validate(request)?;

        let count = request.installment_count.unsigned_abs();
        let monthly_interest_rate = Self::monthly_rate(request.annual_interest_rate_percent);
        let amortization = Self::amortization_amount(request.financed_amount, count);

        // The carried balance stays unclamped so interest never picks up the
        // display floor; only the emitted remaining balance is clamped.
        let mut balance = request.financed_amount;
        let mut cumulative_interest = Decimal::ZERO;
        let mut cumulative_amortization = Decimal::ZERO;
        let mut installments = Vec::with_capacity(count as usize);

        for index in 1..=count {
            let interest = balance
                .checked_mul(monthly_interest_rate)
                .ok_or(AmortizationError::ArithmeticOverflow)?;
            let payment_amount = amortization
                .checked_add(interest)
                .ok_or(AmortizationError::ArithmeticOverflow)?;

            cumulative_interest = cumulative_interest
                .checked_add(interest)
                .ok_or(AmortizationError::ArithmeticOverflow)?;
            cumulative_amortization = cumulative_amortization
                .checked_add(amortization)
                .ok_or(AmortizationError::ArithmeticOverflow)?;
            balance = balance
                .checked_sub(amortization)
                .ok_or(AmortizationError::ArithmeticOverflow)?;

            installments.push(Installment {
                index,
                amortization,
                interest,
                payment_amount,
                remaining_balance: balance.max(Decimal::ZERO),
                cumulative_interest,
                cumulative_amortization,
            });
        }

        let total_interest = cumulative_interest;
        let total_payable = request
            .financed_amount
            .checked_add(total_interest)
            .ok_or(AmortizationError::ArithmeticOverflow)?;

        Ok(SimulationResult {
            financed_amount: request.financed_amount,
            annual_interest_rate_percent: request.annual_interest_rate_percent,
            monthly_interest_rate,
            installment_count: request.installment_count,
            amortization_amount: amortization,
            total_interest,
            total_payable,
            installments,
        })
    }
}
