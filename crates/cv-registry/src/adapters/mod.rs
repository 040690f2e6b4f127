//! # Adapters
//!
//! Concrete `DataVault` implementations.

pub mod memory;

pub use memory::MemoryVault;
