use op_outcome::{caller, fail, Code};

#[test]
fn fail_with_code_only() {
    let outcome = fail!(Code::NOT_IMPLEMENTED);

    assert!(outcome.is_failure());
    assert!(outcome.messages().is_empty());
    assert!(outcome.has_code(Code::NOT_IMPLEMENTED));
}

#[test]
fn fail_formats_the_message() {
    let sku = "A-17";
    let outcome = fail!("OUT_OF_STOCK", "sku {} has {} units", sku, 0);

    assert_eq!(outcome.to_string(), "FAIL (OUT_OF_STOCK) sku A-17 has 0 units");
}

#[test]
fn fail_drops_blank_formatted_messages() {
    let outcome = fail!(Code::GENERAL_ERROR, "{}", "   ");
    assert!(outcome.messages().is_empty());
}

#[test]
fn caller_uses_the_module_path() {
    assert_eq!(caller!().as_str(), module_path!());
    assert!(caller!().as_str().ends_with("macros"));
}
