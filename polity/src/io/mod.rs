//! I/O helpers for polity commands.

pub mod scenario;
