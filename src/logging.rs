//! Logging hooks for embedders.
//!
//! The library logs state transitions through the `log` facade; the demo
//! binary keeps the call sites wired but installs no backend. Hosts that
//! want output can install any `log` backend before constructing widgets.

/// Install the default (no-op) logging setup for the demo binary.
pub fn initialize() {}
