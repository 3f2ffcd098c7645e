// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for blockseek integration tests
//!
//! Provides chain fixtures and oracle doubles so resolution can be tested
//! without real blockchain connections.

#![allow(dead_code)]

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use blockseek::{BlockId, BlockRef, BlockTimestampOracle, InMemoryOracle, RpcError};

/// Blocks 0..=100 where block n is produced at `1000 + 10n`
pub fn linear_chain() -> InMemoryOracle {
    InMemoryOracle::from_fn(100, |n| 1000 + 10 * n)
}

/// Blocks 0..=100 where genesis and block 1 share timestamp 1000
/// and block n (n >= 1) is produced at `990 + 10n`
pub fn shared_genesis_chain() -> InMemoryOracle {
    InMemoryOracle::from_fn(100, |n| if n == 0 { 1000 } else { 990 + 10 * n })
}

/// Builds an oracle from per-block gaps, starting at `base`
pub fn chain_from_gaps(base: u64, gaps: &[u64]) -> InMemoryOracle {
    let mut timestamps = Vec::with_capacity(gaps.len() + 1);
    let mut ts = base;
    timestamps.push(ts);
    for gap in gaps {
        ts += gap;
        timestamps.push(ts);
    }
    InMemoryOracle::new(timestamps)
}

/// Runs a future to completion on a fresh current-thread runtime
///
/// proptest bodies are synchronous, so async resolution is driven from here.
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build tokio runtime")
        .block_on(future)
}

/// Installs a test-friendly tracing subscriber honoring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Oracle double that fails once a fetch budget is exhausted
///
/// # Example
///
/// ```rust,ignore
/// // Serve the two window edges, then fail the first midpoint probe
/// let oracle = FailingOracle::new(linear_chain(), 2);
/// ```
pub struct FailingOracle {
    inner: InMemoryOracle,
    remaining: AtomicU64,
}

impl FailingOracle {
    /// Serves `budget` fetches from `inner`, then fails every fetch
    pub fn new(inner: InMemoryOracle, budget: u64) -> Self {
        Self {
            inner,
            remaining: AtomicU64::new(budget),
        }
    }
}

#[async_trait]
impl BlockTimestampOracle for FailingOracle {
    async fn fetch_block(&self, block: BlockId) -> Result<BlockRef, RpcError> {
        let allowed = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if allowed {
            self.inner.fetch_block(block).await
        } else {
            Err(RpcError::fetch_failed(
                block,
                std::io::Error::other("connection reset by peer"),
            ))
        }
    }

    fn name(&self) -> &'static str {
        "FailingOracle"
    }
}
