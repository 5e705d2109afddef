//! Global subscriber installation. Kept in its own test binary so the
//! subscriber it installs does not leak into the library's unit tests.

use loan_accrual_rs::{logging, LoanError};

#[test]
fn test_second_init_fails() {
    logging::init("warn").unwrap();

    match logging::init("warn") {
        Err(LoanError::InvalidConfiguration { message }) => {
            assert!(message.contains("already"), "unexpected message: {message}");
        }
        other => panic!("expected InvalidConfiguration, got {other:?}"),
    }
}
