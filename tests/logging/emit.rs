use super::{error, fault_line, info, RecordingSink};
use op_outcome::logging::{CallerId, Logger};
use op_outcome::{Code, Fault, Outcome, ValueOutcome};

#[test]
fn success_logs_description_then_messages() {
    let sink = RecordingSink::default();
    Outcome::succeeded()
        .with_message("row 1")
        .with_message("row 2")
        .log(&sink, Some("import finished"));

    assert_eq!(sink.lines(), [info("import finished"), info("row 1"), info("row 2")]);
}

#[test]
fn success_with_explicit_message_logs_only_the_message() {
    let sink = RecordingSink::default();
    Outcome::succeeded()
        .with_message("row 1")
        .log_with(&sink, Some("import finished"), Some("42 rows"));

    assert_eq!(sink.lines(), [info("42 rows")]);
}

#[test]
fn bare_success_logs_nothing() {
    let sink = RecordingSink::default();
    Outcome::succeeded().log(&sink, None);

    assert!(sink.lines().is_empty());
}

#[test]
fn failure_logs_code_with_description_then_messages() {
    let sink = RecordingSink::default();
    Outcome::new()
        .with_failure(Code::NOT_FOUND, Some("order 7"))
        .with_message("checked archive")
        .log(&sink, Some("load order"));

    assert_eq!(
        sink.lines(),
        [error("NOT_FOUND load order"), error("order 7"), error("checked archive")]
    );
}

#[test]
fn failure_with_explicit_message_skips_recorded_messages() {
    let sink = RecordingSink::default();
    Outcome::new()
        .with_failure(Code::NOT_FOUND, Some("order 7"))
        .log_with(&sink, Some("load order"), Some("lookup failed"));

    assert_eq!(sink.lines(), [error("lookup failed"), error("NOT_FOUND load order")]);
}

#[test]
fn failure_with_code_only() {
    let sink = RecordingSink::default();
    Outcome::failure(Code::NOT_IMPLEMENTED, Some("export to pdf")).log(&sink, None);

    assert_eq!(sink.lines(), [error("NOT_IMPLEMENTED"), error("export to pdf")]);
}

#[test]
fn failure_without_code_logs_description_alone() {
    let sink = RecordingSink::default();
    Outcome::new().with_message("partial write").log(&sink, Some("flush"));

    assert_eq!(sink.lines(), [error("flush"), error("partial write")]);
}

#[test]
fn fault_is_logged_last_with_the_fixed_prefix() {
    let sink = RecordingSink::default();
    Outcome::new()
        .with_fault(Fault::msg("connection refused"))
        .with_message("gave up after 3 tries")
        .log(&sink, Some("sync"));

    assert_eq!(
        sink.lines(),
        [
            error("UNEXPECTED_ERROR sync"),
            error("gave up after 3 tries"),
            fault_line("connection refused"),
        ]
    );
}

#[test]
fn blank_description_and_message_count_as_absent() {
    let sink = RecordingSink::default();
    Outcome::failure(Code::GENERAL_ERROR, Some("detail")).log_with(&sink, Some("  "), Some(""));

    assert_eq!(sink.lines(), [error("ERROR"), error("detail")]);
}

#[test]
fn log_returns_the_receiver() {
    let sink = RecordingSink::default();
    let outcome = Outcome::failure(Code::NOT_FOUND, None);
    let returned = outcome.log(&sink, None);

    assert!(std::ptr::eq(returned, &outcome));
}

#[test]
fn record_then_log_chains_on_a_held_outcome() {
    let sink = RecordingSink::default();
    let mut outcome = Outcome::succeeded();
    outcome
        .record_validation_failure("quantity must be positive")
        .log(&sink, Some("add line"));

    assert_eq!(
        sink.lines(),
        [error("VALIDATION_FAILURE add line"), error("quantity must be positive")]
    );
    assert!(outcome.is_failure());
}

#[test]
fn logged_builder_keeps_the_value() {
    let sink = RecordingSink::default();
    let outcome = ValueOutcome::from_value(3_u8).with_message("cached").logged(&sink, None);

    assert_eq!(outcome.value(), Some(&3));
    assert_eq!(sink.lines(), [info("cached")]);
}

#[test]
fn logger_routes_through_the_resolved_sink() {
    struct Checkout;

    let resolver = |caller: &CallerId| {
        assert!(caller.as_str().ends_with("Checkout"));
        RecordingSink::default()
    };
    let logger = Logger::resolve(&resolver, CallerId::of::<Checkout>());
    Outcome::failure(Code::NOT_AUTHORIZED, None).log(&logger, Some("pay"));

    assert_eq!(logger.sink().lines(), [error("NOT_AUTHORIZED pay")]);
}

#[test]
fn outcome_flipped_to_success_logs_no_stale_fault() {
    let sink = RecordingSink::default();
    let mut outcome = Outcome::new().with_fault(Fault::msg("boom"));
    outcome.set_success(true);
    outcome.log(&sink, Some("op"));

    assert_eq!(sink.lines(), [info("op")]);
    assert!(outcome.fault().is_none());
}
