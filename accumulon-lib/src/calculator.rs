//! The basic calculator: one `f64` accumulator and the four binary
//! arithmetic operations.

use log::{debug, trace};
#[cfg(any(feature = "serde", test))]
use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// One of the four binary arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl TryFrom<char> for BinaryOp {
    type Error = CalculatorError;

    fn try_from(operator: char) -> Result<Self, Self::Error> {
        match operator {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            _ => {
                debug!("unsupported operator {operator:?}");
                Err(CalculatorError::UnsupportedOperation)
            }
        }
    }
}

/// A calculator holding a single accumulator value, updated in place by
/// each successful operation. The accumulator starts at 0.0 and a failed
/// call never changes it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(any(feature = "serde", test), derive(Serialize, Deserialize))]
pub struct Calculator {
    current_value: f64,
}

impl Calculator {
    /// Creates a calculator with the accumulator set to 0.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the operation selected by `operator` to the accumulator,
    /// with `value` as the right-hand operand.
    ///
    /// Supported operators are `+`, `-`, `*` and `/`; anything else is
    /// rejected with [`CalculatorError::UnsupportedOperation`].
    pub fn calculate(&mut self, value: f64, operator: char) -> Result<(), CalculatorError> {
        self.apply(value, BinaryOp::try_from(operator)?)
    }

    /// Applies `op` to the accumulator with `value` as the right-hand
    /// operand. Division by exactly 0.0 (either sign of zero) is rejected
    /// with [`CalculatorError::DivisionByZero`].
    pub fn apply(&mut self, value: f64, op: BinaryOp) -> Result<(), CalculatorError> {
        let result = match op {
            BinaryOp::Add => self.current_value + value,
            BinaryOp::Sub => self.current_value - value,
            BinaryOp::Mul => self.current_value * value,
            BinaryOp::Div => {
                if value == 0.0 {
                    debug!("division by zero rejected");
                    return Err(CalculatorError::DivisionByZero);
                }
                self.current_value / value
            }
        };
        trace!("{op:?} {value} on {} -> {result}", self.current_value);
        self.current_value = result;
        Ok(())
    }

    /// Returns the accumulator, without side effects.
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Overwrites the accumulator unconditionally. No rounding or clamping
    /// is applied.
    pub fn set_current_value(&mut self, value: f64) {
        self.current_value = value;
    }
}
