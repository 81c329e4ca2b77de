//! Shared building blocks for the symgas nozzle toolkit.
//!
//! This crate holds the pieces every other symgas crate leans on:
//!
//! - [`constraint`]: type-level numeric invariants checked once at
//!   construction, used to validate Mach numbers, stagnation conditions,
//!   and the specific heat ratio at API boundaries

pub mod constraint;
