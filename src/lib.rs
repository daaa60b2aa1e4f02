//! adacalc — arithmetic calculator with a pluggable calculation backend.
//!
//! The crate exposes two pieces: [`Calculator`], a pure implementation of the
//! four basic arithmetic operations keyed by string identifier, and
//! [`CalculatorMachine`], a delegating wrapper that forwards to any
//! [`Calculate`] implementation so the calculation strategy can be substituted
//! (e.g. with a test double) without changing call sites.

pub mod calculator;
pub mod machine;
pub mod models;

pub use calculator::{Calculate, Calculator, CalculatorError};
pub use machine::CalculatorMachine;
pub use models::{Operation, OperationResult};
