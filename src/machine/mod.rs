//! Delegating calculator machine.
//!
//! [`CalculatorMachine`] holds an injected [`Calculate`] implementation and
//! forwards calls to it unchanged. Call sites depend on the machine, so the
//! calculation strategy can be swapped (test double, alternate numeric
//! backend) without touching them.

use std::sync::Arc;

use crate::calculator::{Calculate, Calculator, CalculatorError};
use crate::models::OperationResult;

/// A calculator wrapper with a substitutable backend.
pub struct CalculatorMachine {
    calculator: Arc<dyn Calculate>,
}

impl CalculatorMachine {
    /// Create a machine backed by the given calculator.
    pub fn new(calculator: Arc<dyn Calculate>) -> Self {
        Self { calculator }
    }

    /// Delegate the calculation to the injected backend.
    ///
    /// Exactly one backend call per invocation; arguments are passed through
    /// unmodified and the result is returned untransformed.
    pub fn calculate(
        &self,
        operation: &str,
        a: f64,
        b: f64,
    ) -> Result<OperationResult, CalculatorError> {
        self.calculator.calculate(operation, a, b)
    }
}

impl Default for CalculatorMachine {
    /// A machine backed by the standard [`Calculator`].
    fn default() -> Self {
        Self::new(Arc::new(Calculator))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Operation;

    #[test]
    fn default_machine_uses_standard_calculator() {
        let machine = CalculatorMachine::default();
        let res = machine.calculate("sum", 1.23, 13.0).unwrap();
        assert_eq!(res.operation, Operation::Sum);
        assert_eq!(res.result, 14.23);
    }

    #[test]
    fn default_machine_surfaces_unsupported_operation() {
        let machine = CalculatorMachine::default();
        let err = machine.calculate("sqrt", 4.0, 0.0).unwrap_err();
        assert_eq!(err, CalculatorError::UnsupportedOperation("sqrt".to_string()));
    }

    #[test]
    fn machine_accepts_injected_backend() {
        let machine = CalculatorMachine::new(Arc::new(Calculator));
        let res = machine.calculate("divide", -10.0, -2.0).unwrap();
        assert_eq!(res.operation, Operation::Divide);
        assert_eq!(res.result, 5.0);
    }
}
