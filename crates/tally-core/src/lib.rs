//! tally core: the shared counter primitive, error surface, and view contract.
//!
//! This crate defines the state and data contracts shared by the server and
//! its tests. It intentionally carries no transport or runtime dependencies
//! so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result` so the serving
//! process does not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod view;

pub use counter::Counter;
/// Shared result type.
pub use error::{Result, TallyError};
pub use view::CounterView;
