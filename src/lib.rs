#[macro_use]
extern crate log;

// Modules of the arithmetic sanity runner
pub mod sanity {
    // For error handling
    pub mod sanity_result;
    // Arithmetic operators under test
    pub mod operator;
    // Literals and block-local variables
    pub mod operand;
    // Evaluates binary operations on numbers
    pub mod runtime;
    // A single `lhs op rhs == expected` check
    pub mod assertion;
    // The three checks for one operator
    pub mod block;
    // Runs every block in order and stops at the first failure
    pub mod runner;
}
