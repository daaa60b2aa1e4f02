//! Shared types used across the crate.
//!
//! Defines the closed set of arithmetic operations and the value type
//! returned from a calculation. The calculator and machine modules import
//! from here rather than defining their own representations.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::calculator::CalculatorError;

/// The four supported arithmetic operations.
///
/// The string boundary uses exact lowercase identifiers (`"sum"`,
/// `"subtract"`, `"multiply"`, `"divide"`); anything else fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Sum,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Apply the operation to two operands.
    ///
    /// Division follows native IEEE-754 semantics: a nonzero numerator over
    /// zero yields positive or negative infinity (sign from the numerator),
    /// and `0 / 0` yields NaN. No rounding or normalization is applied.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Sum => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Sum => write!(f, "sum"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Operation::Sum),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(CalculatorError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// The outcome of a single calculation: which operation ran and its value.
///
/// Plain value type with no identity beyond equality; constructed, returned,
/// and discarded within a single call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OperationResult {
    /// The operation that produced this result.
    pub operation: Operation,
    /// The computed value.
    pub result: f64,
}
