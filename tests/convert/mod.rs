use op_outcome::{Code, Outcome, ValueOutcome};
use std::io;

#[test]
fn capture_ok_unit_result() {
    let outcome = Outcome::capture(Ok::<(), io::Error>(()));

    assert!(outcome.is_success());
    assert_eq!(outcome.into_result(), Ok(()));
}

#[test]
fn capture_err_unit_result() {
    let outcome: Outcome = Err::<(), _>(io::Error::new(io::ErrorKind::Other, "lost lock")).into();

    assert!(outcome.has_code(Code::UNEXPECTED_ERROR));
    assert_eq!(outcome.fault().map(|f| f.message()).as_deref(), Some("lost lock"));

    let back = outcome.into_result().unwrap_err();
    assert_eq!(back.to_string(), "FAIL (UNEXPECTED_ERROR) lost lock.");
}

#[test]
fn value_outcome_from_parse_result() {
    let parsed: ValueOutcome<u8> = "300".parse::<u8>().into();

    assert!(parsed.is_failure());
    assert_eq!(parsed.value(), None);
    assert!(parsed.fault().is_some());
}

#[test]
fn into_result_yields_the_value_on_success() {
    let outcome = ValueOutcome::from_value("ready");
    assert_eq!(outcome.into_result().ok(), Some("ready"));
}

#[test]
fn into_result_of_valueless_success_is_an_error() {
    let mut outcome: ValueOutcome<u8> = ValueOutcome::new();
    outcome.set_success(true);

    let err = outcome.into_result().unwrap_err();
    assert!(err.is_success());
}

#[test]
fn into_result_drops_the_value_of_a_later_failure() {
    let outcome = ValueOutcome::from_value(1_u8).with_failure(Code::NOT_AUTHORIZED, Some("revoked"));

    let err = outcome.into_result().unwrap_err();
    assert_eq!(err.to_string(), "FAIL (NOT_AUTHORIZED) revoked");
}

#[test]
fn outcomes_work_with_the_question_mark_operator() {
    fn step(ok: bool) -> ValueOutcome<u32> {
        if ok {
            ValueOutcome::from_value(1)
        } else {
            ValueOutcome::new().with_failure(Code::GENERAL_ERROR, Some("step failed"))
        }
    }

    fn pipeline(second: bool) -> Result<u32, Outcome> {
        let a = step(true).into_result()?;
        let b = step(second).into_result()?;
        Ok(a + b)
    }

    assert_eq!(pipeline(true), Ok(2));
    assert_eq!(pipeline(false).unwrap_err().messages(), ["step failed"]);
}
