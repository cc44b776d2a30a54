#![doc(test(attr(deny(warnings))))]

//! Calorie Core holds the state of a single-session calorie tracker: a fixed
//! category catalog, an ordered list of food and exercise entries driven by a
//! reducer-style transition function, and the form and list views that talk
//! to it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod tracker;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with_filter(None);
}

/// Same as [`init`], with an explicit filter directive used when `RUST_LOG`
/// is unset.
pub fn init_with_filter(directive: Option<&str>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(directive);
        tracing::info!("Calorie Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
