//! # Adapters
//!
//! Concrete identity providers and delay policies.

pub mod delay;
pub mod wallet;

pub use delay::{FixedDelay, NoDelay};
pub use wallet::LocalWallet;
