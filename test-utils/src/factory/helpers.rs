//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// Starts well inside the 17-20 digit snowflake range so generated ids look like
/// real Discord ids.
static COUNTER: std::sync::atomic::AtomicU64 =
    std::sync::atomic::AtomicU64::new(500_000_000_000_000_000);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds an API token for the given bot id in the `DELAPI_<secret>-<id>` shape.
pub fn token_for(id: &str) -> String {
    format!("DELAPI_{:0>32}-{}", id.len(), id)
}
