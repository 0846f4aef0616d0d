//! Order Service Pattern
//!
//! A service method that validates input, calls a store, and reports the
//! combined outcome through a per-component logger.

use op_outcome::logging::{CallerId, LogSink, Logger, TracingLogger};
use op_outcome::prelude::*;

#[derive(Debug, Clone)]
struct Order {
    id: u64,
    quantity: u32,
}

#[derive(Debug)]
struct StoreUnavailable;

impl std::fmt::Display for StoreUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "order store unavailable")
    }
}

impl std::error::Error for StoreUnavailable {}

// Prints lines so the demo shows output without a tracing subscriber
struct ConsoleSink(CallerId);

impl LogSink for ConsoleSink {
    fn info(&self, text: &str) {
        println!("INFO  [{}] {}", self.0, text);
    }

    fn error(&self, text: &str, fault: Option<&Fault>) {
        match fault {
            Some(fault) => println!("ERROR [{}] {} {}", self.0, text, fault),
            None => println!("ERROR [{}] {}", self.0, text),
        }
    }
}

struct OrderService;

impl OrderService {
    fn validate(&self, order: &Order) -> Outcome {
        let mut outcome = Outcome::succeeded();
        if order.quantity == 0 {
            outcome.record_validation_failure("quantity must be positive");
        }
        if order.id == 0 {
            outcome.record_failure(Code::MISSING_REQUIRED_FIELDS, Some("order id is required"));
        }
        outcome
    }

    fn store(&self, order: &Order) -> Result<u64, StoreUnavailable> {
        if order.id % 2 == 0 {
            Err(StoreUnavailable)
        } else {
            Ok(order.id)
        }
    }

    fn place(&self, order: Order) -> ValueOutcome<u64> {
        let validation = self.validate(&order);
        if validation.is_failure() {
            return validation.into();
        }

        let mut placed = self.store(&order).into_outcome();
        placed.record_message(format!("order {} processed", order.id));
        placed
    }
}

fn main() {
    let service = OrderService;
    let console = Logger::new(CallerId::of_val(&service), ConsoleSink(CallerId::of_val(&service)));
    let tracing = TracingLogger::for_val(&service);

    for order in [
        Order { id: 7, quantity: 2 },
        Order { id: 8, quantity: 1 },
        Order { id: 0, quantity: 0 },
    ] {
        let outcome = service.place(order);
        outcome.log(&console, Some("place order"));
        outcome.log(&tracing, Some("place order"));
        println!("=> {outcome}");
    }
}
