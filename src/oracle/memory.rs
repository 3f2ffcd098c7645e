// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Oracle backed by an in-memory list of block timestamps

use alloy_primitives::BlockNumber;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

use super::{BlockId, BlockRef, BlockTimestampOracle};
use crate::errors::RpcError;

/// Oracle serving blocks from a vector of timestamps indexed by block number
///
/// The last element is the latest block. Every fetch is counted, which makes
/// this oracle handy for asserting how many lookups a resolution performed.
///
/// # Examples
///
/// ```rust
/// use blockseek::InMemoryOracle;
///
/// // Blocks 0..=100, one every 10 seconds starting at 1000
/// let oracle = InMemoryOracle::from_fn(100, |n| 1000 + 10 * n);
/// assert_eq!(oracle.latest_block(), Some(100));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryOracle {
    timestamps: Vec<u64>,
    fetches: AtomicU64,
}

impl InMemoryOracle {
    /// Creates an oracle where block `n` has timestamp `timestamps[n]`
    pub fn new(timestamps: Vec<u64>) -> Self {
        Self {
            timestamps,
            fetches: AtomicU64::new(0),
        }
    }

    /// Creates an oracle for blocks `0..=latest` with timestamps from `timestamp_of`
    pub fn from_fn(latest: BlockNumber, timestamp_of: impl Fn(BlockNumber) -> u64) -> Self {
        Self::new((0..=latest).map(timestamp_of).collect())
    }

    /// Returns the number of the latest block, or `None` for an empty chain
    pub fn latest_block(&self) -> Option<BlockNumber> {
        self.timestamps.len().checked_sub(1).map(|n| n as BlockNumber)
    }

    /// Returns how many fetches have been served since creation or the last reset
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }

    /// Resets the fetch counter to zero
    pub fn reset_fetch_count(&self) {
        self.fetches.store(0, Ordering::Relaxed);
    }

    fn lookup(&self, block: BlockId) -> Option<BlockRef> {
        let number = match block {
            BlockId::Number(number) => number,
            BlockId::Latest => self.latest_block()?,
        };
        let index = usize::try_from(number).ok()?;
        self.timestamps
            .get(index)
            .map(|&timestamp| BlockRef::new(number, timestamp))
    }
}

#[async_trait]
impl BlockTimestampOracle for InMemoryOracle {
    async fn fetch_block(&self, block: BlockId) -> Result<BlockRef, RpcError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let found = self.lookup(block);
        trace!(block = %block, found = found.is_some(), "In-memory block lookup");
        found.ok_or(RpcError::BlockNotFound { block })
    }

    fn name(&self) -> &'static str {
        "InMemoryOracle"
    }
}
