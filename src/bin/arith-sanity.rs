use arith_sanity::sanity::runner::SanityRunner;
use arith_sanity::sanity::runtime::NativeRuntime;
use std::process;

/// Exit status code used when every assertion holds.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status code used for the first failing assertion.
pub const EXIT_FAILURE: i32 = 1;

fn main() {
    // Initialize logger
    pretty_env_logger::init();

    let exit_code = match SanityRunner::new(NativeRuntime).run() {
        Ok(_) => EXIT_SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            EXIT_FAILURE
        }
    };

    process::exit(exit_code);
}
