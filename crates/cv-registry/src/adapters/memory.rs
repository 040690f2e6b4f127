//! # In-Memory Vault
//!
//! `DataVault` over a process-local map. Used by unit and integration tests
//! and as the development backend; production wires a remote gateway instead.
//!
//! Failure injection mirrors the conditions the store contract allows:
//! the vault as a whole can be unavailable, and individual writes can fail.

use crate::ports::DataVault;
use async_trait::async_trait;
use shared_types::RegistryError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Process-local vault with failure injection and call counters.
#[derive(Default)]
pub struct MemoryVault {
    cells: Mutex<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
    skip_before_failure: AtomicUsize,
    failing_writes: AtomicUsize,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MemoryVault {
    /// Create an empty, available vault.
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            ..Self::default()
        }
    }

    /// Toggle the availability probe and make reads/writes fail while down.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Make the next `count` writes fail with `NotAvailable`.
    pub fn fail_next_writes(&self, count: usize) {
        self.fail_writes_after(0, count);
    }

    /// Let `skip` writes succeed, then fail the following `count` writes.
    /// Lets a test target one write inside a multi-write operation.
    pub fn fail_writes_after(&self, skip: usize, count: usize) {
        self.skip_before_failure.store(skip, Ordering::SeqCst);
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    /// Number of reads served (including failed ones).
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of writes attempted (including failed ones).
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of keys currently stored.
    pub fn key_count(&self) -> usize {
        self.cells.lock().map(|cells| cells.len()).unwrap_or(0)
    }

    fn check_available(&self) -> Result<(), RegistryError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RegistryError::NotAvailable(
                "memory vault disabled".to_string(),
            ))
        }
    }

    fn cells(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, RegistryError> {
        self.cells
            .lock()
            .map_err(|_| RegistryError::NotAvailable("vault lock poisoned".to_string()))
    }
}

#[async_trait]
impl DataVault for MemoryVault {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, RegistryError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self.cells()?.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &[u8]) -> Result<(), RegistryError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let skip = self.skip_before_failure.load(Ordering::SeqCst);
        if skip > 0 {
            self.skip_before_failure.store(skip - 1, Ordering::SeqCst);
        } else {
            let remaining = self.failing_writes.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failing_writes.store(remaining - 1, Ordering::SeqCst);
                return Err(RegistryError::NotAvailable(
                    "injected write failure".to_string(),
                ));
            }
        }
        self.cells()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }
}
