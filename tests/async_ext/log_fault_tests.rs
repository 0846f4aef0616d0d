use crate::logging::{error, fault_line, RecordingSink};
use op_outcome::Code;
use op_outcome::async_ext::FutureOutcomeExt;
use std::sync::Arc;

#[tokio::test]
async fn ok_output_is_not_logged() {
    let sink = Arc::new(RecordingSink::default());
    let result = async { Ok::<_, &str>(7) }.log_fault(Arc::clone(&sink)).await;

    assert_eq!(result, Ok(7));
    assert!(sink.lines().is_empty());
}

#[tokio::test]
async fn err_output_is_logged_once_and_passed_through() {
    let sink = Arc::new(RecordingSink::default());
    let result = async { Err::<u8, _>("connection reset") }
        .log_fault(Arc::clone(&sink))
        .await;

    assert_eq!(result, Err("connection reset"));
    assert_eq!(sink.lines(), [error("UNEXPECTED_ERROR"), fault_line("connection reset")]);
}

#[tokio::test]
async fn description_is_attached_to_the_code_line() {
    let sink = Arc::new(RecordingSink::default());
    let _ = async { Err::<(), _>(std::io::Error::new(std::io::ErrorKind::Other, "eof")) }
        .log_fault_as(Arc::clone(&sink), "refresh tokens")
        .await;

    assert_eq!(sink.lines(), [error("UNEXPECTED_ERROR refresh tokens"), fault_line("eof")]);
}

#[tokio::test]
async fn log_outcome_keeps_the_original_error() {
    let sink = Arc::new(RecordingSink::default());
    let outcome = async { Err::<u8, _>(std::io::Error::new(std::io::ErrorKind::TimedOut, "slow peer")) }
        .log_outcome(Arc::clone(&sink), Some("sync peers"))
        .await;

    assert!(outcome.has_code(Code::UNEXPECTED_ERROR));
    let kind = outcome
        .fault()
        .and_then(|fault| fault.downcast_ref::<std::io::Error>())
        .map(std::io::Error::kind);
    assert_eq!(kind, Some(std::io::ErrorKind::TimedOut));
    assert_eq!(sink.lines(), [error("UNEXPECTED_ERROR sync peers"), fault_line("slow peer")]);
}

#[tokio::test]
async fn log_outcome_of_ok_carries_the_value_silently() {
    let sink = Arc::new(RecordingSink::default());
    let outcome = async { Ok::<_, std::io::Error>("synced") }
        .log_outcome(Arc::clone(&sink), None)
        .await;

    assert!(outcome.is_success());
    assert_eq!(outcome.value(), Some(&"synced"));
    assert!(sink.lines().is_empty());
}
