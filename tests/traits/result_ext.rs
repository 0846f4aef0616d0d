use op_outcome::traits::ResultOutcomeExt;
use op_outcome::Code;
use std::io;

#[test]
fn ok_becomes_a_valued_success() {
    let result: Result<u32, io::Error> = Ok(9);
    let outcome = result.into_outcome();

    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&9));
    assert_eq!(outcome.code(), None);
}

#[test]
fn err_becomes_an_unexpected_fault() {
    let result: Result<u32, io::Error> = Err(io::Error::new(io::ErrorKind::Other, "broken pipe"));
    let outcome = result.into_outcome();

    assert!(outcome.is_failure());
    assert!(outcome.has_code(Code::UNEXPECTED_ERROR));
    assert_eq!(outcome.to_string(), "FAIL (UNEXPECTED_ERROR) broken pipe.");
}

#[test]
fn into_outcome_with_reclassifies_errors_only() {
    let failed: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "no row"));
    let outcome = failed.into_outcome_with(Code::NOT_FOUND);
    assert!(outcome.has_code(Code::NOT_FOUND));
    assert!(outcome.fault().is_some());

    let fine: Result<(), io::Error> = Ok(());
    let outcome = fine.into_outcome_with(Code::NOT_FOUND);
    assert!(outcome.is_success());
    assert_eq!(outcome.code(), None);
}
