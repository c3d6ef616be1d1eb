//! Binary arithmetic operations.

use super::error::CalcError;

/// One of the four arithmetic rules the calculator knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The operator symbol this operation is bound to.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Only division can fail: a divisor that compares equal to zero
    /// (including `-0.0`) yields [`CalcError::DivisionByZero`].
    pub fn apply(self, x: f64, y: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(x + y),
            Self::Subtract => Ok(x - y),
            Self::Multiply => Ok(x * y),
            Self::Divide => {
                if y == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(x / y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_add() {
        assert_eq!(Operation::Add.apply(1.0, 2.0).unwrap(), 3.0);
        assert_eq!(Operation::Add.apply(-1.0, -2.0).unwrap(), -3.0);
        assert!(approx(Operation::Add.apply(1.1, 2.2).unwrap(), 3.3));
        assert_eq!(Operation::Add.apply(0.0, 5.0).unwrap(), 5.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Operation::Subtract.apply(5.0, 3.0).unwrap(), 2.0);
        assert_eq!(Operation::Subtract.apply(-5.0, -3.0).unwrap(), -2.0);
        assert!(approx(Operation::Subtract.apply(5.5, 2.2).unwrap(), 3.3));
        assert_eq!(Operation::Subtract.apply(5.0, 0.0).unwrap(), 5.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Operation::Multiply.apply(2.0, 3.0).unwrap(), 6.0);
        assert_eq!(Operation::Multiply.apply(-2.0, 3.0).unwrap(), -6.0);
        assert!(approx(Operation::Multiply.apply(2.5, 2.0).unwrap(), 5.0));
        assert_eq!(Operation::Multiply.apply(5.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(Operation::Divide.apply(6.0, 2.0).unwrap(), 3.0);
        assert_eq!(Operation::Divide.apply(-6.0, 2.0).unwrap(), -3.0);
        assert!(approx(Operation::Divide.apply(5.5, 2.0).unwrap(), 2.75));
        assert_eq!(Operation::Divide.apply(5.0, 1.0).unwrap(), 5.0);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(5.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
        // Tiny but non-zero divisors are fine.
        assert!(Operation::Divide.apply(1.0, 1e-300).is_ok());
    }

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: Vec<char> = Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, vec!['+', '-', '*', '/']);
    }
}
