//! The advanced calculator: unary operations and numeric-property checks
//! on the truncated-integer view of the accumulator.

use log::debug;
#[cfg(any(feature = "serde", test))]
use serde::{Deserialize, Serialize};

use crate::calculator::{BinaryOp, Calculator};
use crate::error::CalculatorError;
use crate::math;

/// A unary operation applied to the truncated accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvancedOp {
    /// `n!`, only valid for `0 <= n <= 10`.
    Factorial,
    /// `n` raised to a single-digit exponent.
    Power(u32),
}

impl TryFrom<char> for AdvancedOp {
    type Error = CalculatorError;

    fn try_from(action: char) -> Result<Self, Self::Error> {
        if action == '!' {
            return Ok(Self::Factorial);
        }
        match action.to_digit(10) {
            Some(exponent) => Ok(Self::Power(exponent)),
            None => {
                debug!("unsupported action {action:?}");
                Err(CalculatorError::UnsupportedOperation)
            }
        }
    }
}

/// A numeric property the accumulator can be tested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Characteristic {
    /// Equal to the sum of its decimal digits raised to the digit count.
    Armstrong,
    /// Equal to the sum of its proper divisors.
    Perfect,
}

impl TryFrom<char> for Characteristic {
    type Error = CalculatorError;

    fn try_from(selector: char) -> Result<Self, Self::Error> {
        match selector {
            'A' => Ok(Self::Armstrong),
            'P' => Ok(Self::Perfect),
            _ => {
                debug!("unsupported characteristic {selector:?}");
                Err(CalculatorError::UnsupportedOperation)
            }
        }
    }
}

/// Extends [`Calculator`] with unary operations (factorial, powering) and
/// numeric-property checks (Armstrong number, perfect number).
///
/// Holds the basic calculator and exposes both capability sets through one
/// facade. Advanced operations work on `n`, the accumulator truncated
/// toward zero.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(any(feature = "serde", test), derive(Serialize, Deserialize))]
pub struct AdvancedCalculator {
    calculator: Calculator,
}

impl AdvancedCalculator {
    /// Creates a calculator with the accumulator set to 0.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`Calculator::calculate`].
    pub fn calculate(&mut self, value: f64, operator: char) -> Result<(), CalculatorError> {
        self.calculator.calculate(value, operator)
    }

    /// See [`Calculator::apply`].
    pub fn apply(&mut self, value: f64, op: BinaryOp) -> Result<(), CalculatorError> {
        self.calculator.apply(value, op)
    }

    pub fn current_value(&self) -> f64 {
        self.calculator.current_value()
    }

    pub fn set_current_value(&mut self, value: f64) {
        self.calculator.set_current_value(value);
    }

    /// Applies the unary operation selected by `action` to the truncated
    /// accumulator and stores the result:
    /// `!` for the factorial, a digit `0`-`9` to raise it to that power.
    pub fn calculate_advanced(&mut self, action: char) -> Result<(), CalculatorError> {
        self.apply_advanced(AdvancedOp::try_from(action)?)
    }

    /// Applies `op` to the truncated accumulator and stores the result.
    ///
    /// The factorial is only defined here for `0 <= n <= 10` and fails with
    /// [`CalculatorError::NumberNotInArea`] outside that range. Powering
    /// carries no such restriction; the two domains are intentionally
    /// different.
    pub fn apply_advanced(&mut self, op: AdvancedOp) -> Result<(), CalculatorError> {
        let n = self.truncated();
        let result = match op {
            AdvancedOp::Factorial => {
                if !(0..=10).contains(&n) {
                    debug!("factorial rejected for {n}");
                    return Err(CalculatorError::NumberNotInArea);
                }
                math::factorial(n)
            }
            AdvancedOp::Power(exponent) => math::power(n, exponent),
        };
        self.calculator.set_current_value(result as f64);
        Ok(())
    }

    /// Tests the truncated accumulator for the property selected by
    /// `selector`: `A` for Armstrong number, `P` for perfect number.
    /// Does not mutate the accumulator.
    pub fn has_characteristic(&self, selector: char) -> Result<bool, CalculatorError> {
        self.check(Characteristic::try_from(selector)?)
    }

    /// Tests the truncated accumulator for `characteristic`. Both checks
    /// require `1 <= n` and fail with
    /// [`CalculatorError::NumberNotInArea`] below that.
    pub fn check(&self, characteristic: Characteristic) -> Result<bool, CalculatorError> {
        let n = self.truncated();
        if n < 1 {
            debug!("{characteristic:?} check rejected for {n}");
            return Err(CalculatorError::NumberNotInArea);
        }
        Ok(match characteristic {
            Characteristic::Armstrong => math::is_armstrong(n),
            Characteristic::Perfect => math::is_perfect(n),
        })
    }

    // Fractional part is discarded toward zero; the cast saturates.
    fn truncated(&self) -> i64 {
        self.calculator.current_value() as i64
    }
}
