//! Deterministic, pure logic for polities and their action plans.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and are total over their inputs.

pub mod action;
pub mod polity;
