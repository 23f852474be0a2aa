//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web)
//! - Session seeding (wall clock)

pub mod storage;

pub use storage::LocalStorage;

/// Seed for a session's RNG, taken from the wall clock
#[cfg(target_arch = "wasm32")]
pub fn session_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Seed for a session's RNG, taken from the wall clock
#[cfg(not(target_arch = "wasm32"))]
pub fn session_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
