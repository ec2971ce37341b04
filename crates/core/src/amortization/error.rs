//! Amortization error types.

use sac_shared::AppError;
use thiserror::Error;

/// Amortization-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmortizationError {
    /// Financed amount is zero or negative.
    #[error("Financed amount must be greater than zero.")]
    NonPositiveAmount,

    /// Annual interest rate is negative.
    #[error("Annual interest rate cannot be negative.")]
    NegativeInterestRate,

    /// Installment count is zero or negative.
    #[error("Installment count must be greater than zero.")]
    NonPositiveInstallmentCount,

    /// Installment count is above the supported maximum.
    #[error("Installment count cannot exceed {max} months.")]
    InstallmentCountExceeded {
        /// Maximum number of installments.
        max: i32,
    },

    /// A value left the representable decimal range.
    #[error("Arithmetic overflow while computing the schedule")]
    ArithmeticOverflow,
}

impl AmortizationError {
    /// Returns true if the error was caused by invalid request parameters.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::ArithmeticOverflow)
    }
}

impl From<AmortizationError> for AppError {
    fn from(err: AmortizationError) -> Self {
        if err.is_validation() {
            Self::Validation(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AmortizationError::NonPositiveAmount.to_string(),
            "Financed amount must be greater than zero."
        );
        assert_eq!(
            AmortizationError::NegativeInterestRate.to_string(),
            "Annual interest rate cannot be negative."
        );
        assert_eq!(
            AmortizationError::NonPositiveInstallmentCount.to_string(),
            "Installment count must be greater than zero."
        );
        assert_eq!(
            AmortizationError::InstallmentCountExceeded { max: 480 }.to_string(),
            "Installment count cannot exceed 480 months."
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = AmortizationError::NegativeInterestRate.into();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Annual interest rate cannot be negative."));

        let err: AppError = AmortizationError::ArithmeticOverflow.into();
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.status_code(), 500);
    }
}
