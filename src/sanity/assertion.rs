use crate::sanity::operand::Operand;
use crate::sanity::operator::Operator;
use crate::sanity::runtime::NumericRuntime;
use crate::sanity::sanity_result::{Result, SanityError};

/// Checks that `lhs op rhs` evaluates to exactly `expected`
#[derive(Clone, Debug, PartialEq)]
pub struct Assertion {
    pub lhs: Operand,
    pub op: Operator,
    pub rhs: Operand,
    pub expected: f64,
}

impl Assertion {
    pub fn new(lhs: Operand, op: Operator, rhs: Operand, expected: f64) -> Self {
        Self {
            lhs,
            op,
            rhs,
            expected,
        }
    }

    /// The expression as written, e.g. `var_1 + var_2`
    pub fn description(&self) -> String {
        format!("{} {} {}", self.lhs, self.op, self.rhs)
    }

    pub fn check<R: NumericRuntime>(&self, runtime: &R) -> Result<()> {
        let actual = runtime.evaluate(self.op, self.lhs.value(), self.rhs.value());
        debug!(
            "Checking assertion: {} == {}, got {}",
            self.description(),
            self.expected,
            actual
        );
        // Exact comparison, no tolerance
        if actual != self.expected {
            return Err(SanityError::AssertionMismatch {
                description: self.description(),
                expected: self.expected,
                actual,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanity::runtime::NativeRuntime;

    struct Constant(f64);

    impl NumericRuntime for Constant {
        fn evaluate(&self, _op: Operator, _lhs: f64, _rhs: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_description() {
        let one = Operand::Literal(1.0);
        let literal = Assertion::new(one, Operator::Add, one, 2.0);
        assert_eq!(literal.description(), "1 + 1");

        let var_1 = Operand::variable("var_1", 1.0);
        let var_2 = Operand::variable("var_2", 2.0);
        let mixed = Assertion::new(var_1, Operator::Div, var_2, 0.5);
        assert_eq!(mixed.description(), "var_1 / var_2");
    }

    #[test]
    fn test_check_passes() {
        let var_1 = Operand::variable("var_1", 1.0);
        let var_2 = Operand::variable("var_2", 2.0);
        let assertion = Assertion::new(var_1, Operator::Sub, var_2, -1.0);
        assert!(assertion.check(&NativeRuntime).is_ok());
    }

    #[test]
    fn test_check_reports_mismatch() {
        let one = Operand::Literal(1.0);
        let assertion = Assertion::new(one, Operator::Add, one, 2.0);
        let err = assertion.check(&Constant(3.0)).unwrap_err();
        assert_eq!(err.to_string(), "1 + 1 did not equal 2");

        match err.downcast_ref::<SanityError>() {
            Some(SanityError::AssertionMismatch { actual, .. }) => assert_eq!(*actual, 3.0),
            None => panic!("expected an assertion mismatch"),
        }
    }

    #[test]
    fn test_nan_never_matches() {
        let one = Operand::Literal(1.0);
        let assertion = Assertion::new(one, Operator::Mul, one, 1.0);
        assert!(assertion.check(&Constant(std::f64::NAN)).is_err());
    }
}
