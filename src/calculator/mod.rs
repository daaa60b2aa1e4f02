//! The Calculate trait and the standard calculator.
//!
//! Provides an abstraction layer over the calculation logic so that callers
//! (notably [`crate::machine::CalculatorMachine`]) can substitute alternate
//! backends or test doubles.

use thiserror::Error;

use crate::models::{Operation, OperationResult};

/// Errors from a calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("unsupported operation: '{0}'. Supported: sum, subtract, multiply, divide")]
    UnsupportedOperation(String),
}

/// Trait for performing a single arithmetic calculation.
///
/// Implementations take the operation identifier as a raw string and either
/// return the computed [`OperationResult`] or reject the identifier.
pub trait Calculate: Send + Sync {
    /// Compute `operation` over `a` and `b`.
    fn calculate(
        &self,
        operation: &str,
        a: f64,
        b: f64,
    ) -> Result<OperationResult, CalculatorError>;
}

/// The standard calculator: parses the identifier and applies the operation.
///
/// Pure and stateless; every call is independent. Division by zero is not an
/// error — it produces infinity or NaN per IEEE-754.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculate for Calculator {
    fn calculate(
        &self,
        operation: &str,
        a: f64,
        b: f64,
    ) -> Result<OperationResult, CalculatorError> {
        let operation: Operation = operation.parse()?;
        Ok(OperationResult {
            operation,
            result: operation.apply(a, b),
        })
    }
}
