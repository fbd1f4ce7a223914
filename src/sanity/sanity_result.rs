use failure::Error;
use failure::Fail;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Fail)]
pub enum SanityError {
    #[fail(display = "{} did not equal {}", description, expected)]
    AssertionMismatch {
        description: String,
        expected: f64,
        actual: f64,
    },
}

/// Summary of a run in which every assertion held
#[derive(Clone, Copy, Debug)]
pub struct RunInfo {
    pub assertions_checked: usize,
    pub elapsed: Duration,
}
