use std::fmt;

/// One side of an arithmetic expression
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Literal(f64),
    Variable { name: &'static str, value: f64 },
}

impl Operand {
    pub fn variable(name: &'static str, value: f64) -> Self {
        Operand::Variable { name, value }
    }

    pub fn value(&self) -> f64 {
        match self {
            Operand::Literal(value) | Operand::Variable { value, .. } => *value,
        }
    }
}

/// Literals print as numbers, variables by name
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(value) => write!(f, "{}", value),
            Operand::Variable { name, .. } => f.write_str(name),
        }
    }
}
