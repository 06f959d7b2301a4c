#![doc = include_str!("../README.md")]

pub mod advanced;
pub mod calculator;
pub mod error;

/// The calculator with the full capability set
pub use advanced::{AdvancedCalculator, AdvancedOp, Characteristic};
/// The calculator with the four binary operations
pub use calculator::{BinaryOp, Calculator};
/// The error kinds shared by all operations
pub use error::CalculatorError;
/// The math the calculators build on (for convenience)
pub use accumulon_math as math;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulator_session() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.current_value(), 0.0);
        calculator.set_current_value(2.0);
        calculator.calculate(5.0, '+').unwrap();
        assert_eq!(calculator.current_value(), 7.0);
    }

    #[test]
    fn test_advanced_session() {
        let mut calculator = AdvancedCalculator::new();
        calculator.calculate(6.0, '+').unwrap();
        assert_eq!(calculator.has_characteristic('P'), Ok(true));
        calculator.calculate_advanced('!').unwrap();
        assert_eq!(calculator.current_value(), 720.0);
        // 720 is out of the factorial domain now.
        assert_eq!(
            calculator.calculate_advanced('!'),
            Err(CalculatorError::NumberNotInArea)
        );
        assert_eq!(calculator.current_value(), 720.0);
    }

    #[test]
    fn test_typed_operations_match_selectors() {
        let mut by_char = AdvancedCalculator::new();
        let mut typed = AdvancedCalculator::new();
        by_char.set_current_value(3.0);
        typed.set_current_value(3.0);

        by_char.calculate(4.0, '*').unwrap();
        typed.apply(4.0, BinaryOp::Mul).unwrap();
        by_char.calculate_advanced('2').unwrap();
        typed.apply_advanced(AdvancedOp::Power(2)).unwrap();
        assert_eq!(by_char, typed);
        assert_eq!(typed.current_value(), 144.0);

        assert_eq!(
            by_char.has_characteristic('A'),
            typed.check(Characteristic::Armstrong)
        );
    }
}
