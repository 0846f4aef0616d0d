//! Background Task Pattern
//!
//! Fire-and-forget work whose failures still reach the logs.

use op_outcome::async_ext::{spawn_fault_logger, FutureOutcomeExt};
use op_outcome::logging::TracingLogger;
use std::time::Duration;

struct IndexRefresher;

#[derive(Debug)]
struct IndexError(&'static str);

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "index refresh failed: {}", self.0)
    }
}

impl std::error::Error for IndexError {}

async fn refresh_index(shard: u32) -> Result<u32, IndexError> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    if shard == 3 {
        Err(IndexError("shard 3 is read-only"))
    } else {
        Ok(shard)
    }
}

#[tokio::main]
async fn main() {
    let logger = TracingLogger::for_type::<IndexRefresher>();

    // Awaited inline: the error is logged once and still returned
    let inline = refresh_index(3).log_fault_as(logger.clone(), "inline refresh").await;
    println!("inline result: {inline:?}");

    // Spawned: the continuation logs without anyone awaiting the task
    for shard in 1..=4 {
        let task = tokio::spawn(refresh_index(shard));
        drop(spawn_fault_logger(task, TracingLogger::for_type::<IndexRefresher>()));
    }

    tokio::time::sleep(Duration::from_millis(50)).await;
    println!("done");
}
