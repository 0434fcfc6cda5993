//! Deterministic, pure simulation logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests; the
//! only outside effect is `tracing` diagnostics.

pub mod backoff;
pub mod command;
pub mod engine;
pub mod geometry;
pub mod grid;
