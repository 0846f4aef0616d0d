use op_outcome::logging::{type_key, CallerId};

struct InventoryService;

#[test]
fn type_token_and_value_resolve_to_the_same_key() {
    let service = InventoryService;

    assert_eq!(CallerId::of::<InventoryService>(), CallerId::of_val(&service));
    assert_eq!(CallerId::of_val(&service).as_str(), type_key::<InventoryService>());
}

#[test]
fn key_is_the_full_type_name() {
    let key = type_key::<InventoryService>();
    assert!(key.ends_with("::InventoryService"));
}

#[test]
fn named_identities_keep_their_text() {
    let named = CallerId::named("jobs.nightly");
    assert_eq!(named.to_string(), "jobs.nightly");
    assert_eq!(CallerId::from(String::from("jobs.nightly")), named);
    assert_eq!(CallerId::from("jobs.nightly"), named);
}
