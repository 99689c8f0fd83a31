//! Wealth Projections - financial planning calculators
//!
//! This library provides:
//! - Lump-sum growth (lumpsum, mutual fund, AIF net of fees, future value)
//! - Periodic contributions (SIP, SIP with annual top-up)
//! - Periodic withdrawals (SWP, SIP accumulation followed by SWP)
//! - Inflation-adjusted goal funding (education, marriage, retirement)
//! - Fixed deposit maturity
//! - Batch calculation from CSV, display formatting and user preferences

pub mod input;
pub mod projection;
pub mod calculator;
pub mod catalog;
pub mod format;
pub mod report;
pub mod batch;
pub mod settings;
pub mod error;

// Re-export commonly used types
pub use calculator::{calculate, CalculationOutcome, CalculationRequest, RawFields};
pub use catalog::CalculatorKind;
pub use error::{Result, WealthError};
pub use settings::{Settings, KeyValueStore, JsonFileStore, MemoryStore};
