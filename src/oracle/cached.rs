// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Caching decorator for block timestamp oracles

use alloy_primitives::BlockNumber;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

use super::{BlockId, BlockRef, BlockTimestampOracle};
use crate::cache::{AccessSequence, CacheStats};
use crate::errors::RpcError;

/// Entry in the block cache with its LRU stamp
#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    block: BlockRef,
    access_seq: AccessSequence,
}

/// Internal state for the block cache
#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<BlockNumber, CacheEntry>,
    stats: CacheStats,
    next_seq: AccessSequence,
}

impl CacheState {
    fn bump_seq(&mut self) -> AccessSequence {
        let seq = self.next_seq;
        self.next_seq = seq.next();
        seq
    }

    /// Evicts the least recently used entry
    fn evict_lru(&mut self) {
        let lru = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.access_seq)
            .map(|(number, _)| *number);

        if let Some(number) = lru {
            debug!(block_number = number, "Evicting LRU block cache entry");
            self.entries.remove(&number);
            self.stats.evictions += 1;
        }
    }
}

/// Oracle decorator memoizing numbered blocks
///
/// Numbered blocks are immutable once produced, so lookups for them are
/// cached indefinitely (subject to the optional size limit with LRU eviction).
/// [`BlockId::Latest`] moves with the chain and always passes through to the
/// inner oracle, but the block it returns is cached under its number.
///
/// Repeated resolutions against the same chain re-fetch the same search
/// window edges and midpoints, so a warm cache removes most RPC calls.
///
/// # Examples
///
/// ```rust
/// use blockseek::{CachedOracle, InMemoryOracle};
///
/// let oracle = CachedOracle::new(InMemoryOracle::from_fn(100, |n| n * 12))
///     .with_max_entries(64);
/// ```
#[derive(Debug)]
pub struct CachedOracle<O> {
    inner: O,
    max_entries: Option<usize>,
    state: Mutex<CacheState>,
}

impl<O: BlockTimestampOracle> CachedOracle<O> {
    /// Wraps `inner` with an unbounded cache
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            max_entries: None,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Sets the maximum number of cached blocks
    ///
    /// When the limit is reached, the least recently used block is evicted.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Returns the wrapped oracle
    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Returns current cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.state.lock().await.stats.clone()
    }

    /// Drops every cached block. Statistics other than `entries` are kept.
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        debug!(entries = state.entries.len(), "Clearing block cache");
        state.entries.clear();
        state.stats.entries = 0;
    }

    async fn lookup(&self, number: BlockNumber) -> Option<BlockRef> {
        let mut state = self.state.lock().await;
        let seq = state.bump_seq();

        let hit = state.entries.get_mut(&number).map(|entry| {
            entry.access_seq = seq;
            entry.block
        });

        if hit.is_some() {
            state.stats.hits += 1;
            debug!(block_number = number, "Block cache hit");
        } else {
            state.stats.misses += 1;
            debug!(block_number = number, "Block cache miss");
        }
        hit
    }

    async fn store(&self, block: BlockRef) {
        if self.max_entries == Some(0) {
            return;
        }

        let mut state = self.state.lock().await;
        if !state.entries.contains_key(&block.number) {
            if let Some(max_entries) = self.max_entries {
                while state.entries.len() >= max_entries {
                    state.evict_lru();
                }
            }
        }

        let access_seq = state.bump_seq();
        state
            .entries
            .insert(block.number, CacheEntry { block, access_seq });
        state.stats.entries = state.entries.len();
    }
}

#[async_trait]
impl<O: BlockTimestampOracle> BlockTimestampOracle for CachedOracle<O> {
    async fn fetch_block(&self, block: BlockId) -> Result<BlockRef, RpcError> {
        if let BlockId::Number(number) = block {
            if let Some(cached) = self.lookup(number).await {
                return Ok(cached);
            }
        }

        // The lock is not held across the inner fetch
        let fetched = self.inner.fetch_block(block).await?;
        self.store(fetched).await;
        Ok(fetched)
    }

    fn name(&self) -> &'static str {
        "CachedOracle"
    }
}
