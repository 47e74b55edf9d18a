#![doc(test(attr(deny(warnings))))]

//! Budget Tracker offers the ledger, validation, persistence, and formatting
//! primitives behind a client-side income and expense tracker.

pub mod errors;
pub mod format;
pub mod ledger;
pub mod storage;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Tracker tracing initialized.");
    });
}
