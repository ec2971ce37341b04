//! Core business logic for the SAC simulator.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! The amortization engine is a pure function of its inputs: no state,
//! no I/O, safe to call from any thread.
//!
//! # Modules
//!
//! - `amortization` - SAC schedule calculation and CSV export

pub mod amortization;
