//! Purpose: Library crate backing the `safesum` CLI and its tests.
//! Exports: `api` (entry points), `notice` (diagnostic records and reporters).
//! Role: Digit-only integer parsing and type-tolerant summing with explicit errors.
//! Invariants: Core modules are pure; all diagnostics flow through an injected `Reporter`.
//! Invariants: Inputs are borrowed and never mutated.
pub mod api;
mod core;
pub mod notice;
