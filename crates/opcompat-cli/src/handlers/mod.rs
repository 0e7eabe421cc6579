//! Command handlers.
//!
//! Each handler takes its inputs plus the writer to print to, so it can be
//! driven from tests without touching stdout.

pub mod annotate;
pub mod check;
pub mod whitelist;
