use std::fmt;

/// The binary arithmetic operators exercised by the runner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

use Operator::*;

impl Operator {
    /// Block execution order
    pub const ALL: [Operator; 4] = [Add, Sub, Mul, Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
        }
    }

    /// Name of the check block that exercises this operator
    pub fn block_name(self) -> &'static str {
        match self {
            Add => "Addition",
            Sub => "Subtraction",
            Mul => "Multiplication",
            Div => "Division",
        }
    }

    /// Applies the operator with native `f64` semantics
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Add => lhs + rhs,
            Sub => lhs - rhs,
            Mul => lhs * rhs,
            Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
