//! Workspace umbrella: re-exports [`addrcheck_core`] so the demos can be run
//! from the repository root with `cargo run --example <name>`.

pub use addrcheck_core::*;
