//! Browser-hosted portfolio deck with the live neural activation widget.
//!
//! This crate is a stub by default so the workspace builds on native targets
//! without requiring wasm toolchains. The host-testable parts (`ui_model`,
//! `float_fmt`) are always compiled.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

pub mod float_fmt;
pub mod ui_model;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
