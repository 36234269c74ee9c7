//! Logging facilities for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // Build and drive a widget tree...
//! }
//! ```
//!
//! Every event emitted by the framework carries one of the [`targets`] so
//! subsystems can be filtered independently, e.g.
//! `RUST_LOG=trellis::focus=debug,trellis::drag=trace`.

/// Span names used throughout Trellis for tracing.
pub mod span_names {
    /// Top-level event dispatch span.
    pub const DISPATCH: &str = "trellis::dispatch";
    /// Draw traversal span.
    pub const DRAW: &str = "trellis::draw";
    /// Pack/layout traversal span.
    pub const LAYOUT: &str = "trellis::layout";
}

/// Target names for log filtering.
pub mod targets {
    /// Tree structure (attach, detach, destroy).
    pub const TREE: &str = "trellis::tree";
    /// Event routing.
    pub const DISPATCH: &str = "trellis::dispatch";
    /// Keyboard focus transfers.
    pub const FOCUS: &str = "trellis::focus";
    /// Drag-and-drop sessions.
    pub const DRAG: &str = "trellis::drag";
    /// Skin lookups and loading.
    pub const SKIN: &str = "trellis::skin";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of a whole dispatch or traversal.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "trellis::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
