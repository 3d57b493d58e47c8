use std::fmt;

use crate::aux::he::make_custom_error;

make_custom_error!(DivisionByZero { dividend: f64 }, "cannot divide {} by zero", dividend);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "EVEN"),
            Parity::Odd => write!(f, "ODD"),
        }
    }
}

/// Two operands and the four basic operations over them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calculator {
    num1: f64,
    num2: f64,
}

impl Calculator {
    pub fn new(num1: f64, num2: f64) -> Self {
        Self { num1, num2 }
    }

    pub fn add(&self) -> f64 {
        self.num1 + self.num2
    }

    pub fn subtract(&self) -> f64 {
        self.num1 - self.num2
    }

    pub fn multiply(&self) -> f64 {
        self.num1 * self.num2
    }

    pub fn divide(&self) -> Result<f64, DivisionByZero> {
        if self.num2 == 0.0 {
            return Err(DivisionByZero::new(self.num1));
        }
        Ok(self.num1 / self.num2)
    }

    /// A sum with a fractional part is odd.
    pub fn sum_parity(&self) -> Parity {
        if self.add() % 2.0 == 0.0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn report(&self) -> String {
        let (a, b) = (self.num1, self.num2);
        let division = match self.divide() {
            Ok(q) => q.to_string(),
            Err(err) => format!("error: {err}"),
        };

        format!(
            "===== Calculation Results =====\n\
             Number 1: {a}\n\
             Number 2: {b}\n\
             Addition: {a} + {b} = {sum}\n\
             Subtraction: {a} - {b} = {diff}\n\
             Multiplication: {a} * {b} = {prod}\n\
             Division: {a} / {b} = {division}\n\
             The sum {sum} is {parity}.\n\
             ================================\n",
            sum = self.add(),
            diff = self.subtract(),
            prod = self.multiply(),
            parity = self.sum_parity(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn basic_ops() {
        let c = Calculator::new(7.0, 2.0);
        assert_eq!(c.add(), 9.0);
        assert_eq!(c.subtract(), 5.0);
        assert_eq!(c.multiply(), 14.0);
        assert_eq!(c.divide().unwrap(), 3.5);
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        let c = Calculator::new(5.0, 0.0);
        let err = c.divide().unwrap_err();
        assert_eq!(err.to_string(), "cannot divide 5 by zero");
        assert!(c.report().contains("Division: 5 / 0 = error: cannot divide 5 by zero"));
    }

    #[test]
    fn parity() {
        assert_eq!(Calculator::new(3.0, 5.0).sum_parity(), Parity::Even);
        assert_eq!(Calculator::new(3.0, 4.0).sum_parity(), Parity::Odd);
        assert_eq!(Calculator::new(1.5, 1.0).sum_parity(), Parity::Odd);
        assert_eq!(Calculator::new(-3.0, 1.0).sum_parity(), Parity::Even);
    }

    #[test]
    fn report_lines() {
        let r = Calculator::new(10.0, 4.0).report();
        assert!(r.contains("Addition: 10 + 4 = 14"));
        assert!(r.contains("Division: 10 / 4 = 2.5"));
        assert!(r.contains("The sum 14 is EVEN."));
    }
}
