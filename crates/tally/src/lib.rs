//! Top-level facade crate for tally.
//!
//! Re-exports the core primitives and the server library so users can depend
//! on a single crate.

pub mod core {
    pub use tally_core::*;
}

pub mod server {
    pub use tally_server::*;
}
