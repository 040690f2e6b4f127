//! # Ports
//!
//! Traits this crate requires the host application to implement.

pub mod outbound;

pub use outbound::{Clock, DataVault, FixedClock, SystemClock};
