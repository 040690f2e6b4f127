//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the record store.
//!
//! The vault contract is deliberately minimal: byte-oriented get/set keyed by
//! string, no transactions, no listing, no compare-and-swap. Every read must
//! be treated as reflecting *some* prior committed write, not necessarily the
//! most recent one from this session.

use async_trait::async_trait;
use shared_types::RegistryError;

/// Abstract interface to the shared key-addressed store.
///
/// Production: a remote contract/gateway client.
/// Testing: `MemoryVault` (adapters/memory.rs).
#[async_trait]
pub trait DataVault: Send + Sync {
    /// Read the bytes under a key. `Ok(None)` means the key was never
    /// written (or its write is not yet visible to this session).
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, RegistryError>;

    /// Write bytes under a key, replacing any previous value.
    async fn write(&self, key: &str, value: &[u8]) -> Result<(), RegistryError>;

    /// Availability probe. A synchronization pass checks this first and
    /// aborts early (retaining the prior snapshot) when it reports false.
    async fn is_available(&self) -> bool;
}

/// Abstract interface for time operations (for testability).
pub trait Clock: Send + Sync {
    /// Milliseconds since the unix epoch.
    fn now_millis(&self) -> u64;

    /// Seconds since the unix epoch.
    fn now_secs(&self) -> u64 {
        self.now_millis() / 1000
    }
}

impl<C: Clock> Clock for std::sync::Arc<C> {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Default clock backed by system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually advanced clock for unit tests.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: std::sync::atomic::AtomicU64,
}

impl FixedClock {
    /// Create a clock pinned at `millis`.
    pub fn at_millis(millis: u64) -> Self {
        Self {
            millis: std::sync::atomic::AtomicU64::new(millis),
        }
    }

    /// Advance the clock.
    pub fn advance_millis(&self, delta: u64) {
        self.millis
            .fetch_add(delta, std::sync::atomic::Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(std::sync::atomic::Ordering::SeqCst)
    }
}
