use crate::sanity::operator::Operator;

/// Evaluates `lhs op rhs`. The runner only ever talks to the host's
/// arithmetic through this trait.
pub trait NumericRuntime {
    fn evaluate(&self, op: Operator, lhs: f64, rhs: f64) -> f64;
}

/// IEEE-754 double precision, as provided by the machine
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeRuntime;

impl NumericRuntime for NativeRuntime {
    fn evaluate(&self, op: Operator, lhs: f64, rhs: f64) -> f64 {
        op.apply(lhs, rhs)
    }
}

impl<R: NumericRuntime + ?Sized> NumericRuntime for &R {
    fn evaluate(&self, op: Operator, lhs: f64, rhs: f64) -> f64 {
        (**self).evaluate(op, lhs, rhs)
    }
}
