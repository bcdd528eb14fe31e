//! Unstable sorts.

pub mod quick;
