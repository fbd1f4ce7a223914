use crate::sanity::assertion::Assertion;
use crate::sanity::operand::Operand;
use crate::sanity::operator::Operator;
use crate::sanity::runtime::NumericRuntime;
use crate::sanity::sanity_result::Result;

/// The ordered assertions exercising a single operator.
///
/// Every block binds its own `var_1 = 1` and `var_2 = 2`; nothing is shared
/// between blocks.
#[derive(Clone, Debug)]
pub struct CheckBlock {
    pub operator: Operator,
    pub assertions: Vec<Assertion>,
}

impl CheckBlock {
    pub fn new(operator: Operator) -> Self {
        let (same, distinct) = Self::expected_results(operator);
        let one = Operand::Literal(1.0);
        let var_1 = Operand::variable("var_1", 1.0);
        let var_2 = Operand::variable("var_2", 2.0);
        Self {
            operator,
            assertions: vec![
                Assertion::new(one, operator, one, same),
                Assertion::new(var_1, operator, var_1, same),
                Assertion::new(var_1, operator, var_2, distinct),
            ],
        }
    }

    /// Expected values of `1 op 1` and `1 op 2`
    fn expected_results(operator: Operator) -> (f64, f64) {
        match operator {
            Operator::Add => (2.0, 3.0),
            Operator::Sub => (0.0, -1.0),
            Operator::Mul => (1.0, 2.0),
            Operator::Div => (1.0, 0.5),
        }
    }

    /// Checks the assertions in order and returns how many held. Stops at the
    /// first mismatch.
    pub fn run<R: NumericRuntime>(&self, runtime: &R) -> Result<usize> {
        info!("====== {} block starts ======", self.operator.block_name());
        for assertion in &self.assertions {
            assertion.check(runtime)?;
        }
        info!("====== {} block ends ======", self.operator.block_name());
        Ok(self.assertions.len())
    }
}
