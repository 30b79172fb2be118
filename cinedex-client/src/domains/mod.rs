//! Screen domains: one module per screen, each with its own state,
//! messages, and update function.

pub mod browse;
pub mod detail;
