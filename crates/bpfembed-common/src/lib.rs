//! # bpfembed-common
//!
//! Shared error definitions, byte-code primitives, run configuration, and
//! constants used across the bpfembed workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no other
//! internal crate and provides the foundational types that the core and CLI
//! crates build upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
