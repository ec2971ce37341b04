//! Constant Amortization System (SAC) schedules.

pub mod calculator;
pub mod error;
pub mod export;
pub mod types;


pub use calculator::{MAX_INSTALLMENTS, SacCalculator, ScheduleCalculator, compute, validate};
pub use error::AmortizationError;
pub use export::{CSV_HEADER, ExportError, schedule_to_csv, write_schedule_csv};
pub use types::{Installment, SimulationRequest, SimulationResult};
