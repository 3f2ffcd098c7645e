// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Result types for timestamp resolution

use alloy_primitives::BlockNumber;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pair of block numbers bracketing a timestamp
///
/// The timestamp lies within `[timestamp(low), timestamp(high)]` and
/// `low <= high`. The bounds are degenerate (`low == high`) when a block
/// carries exactly the timestamp; otherwise `low` and `high` are adjacent
/// blocks straddling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockBounds {
    /// Block at or right before the timestamp
    pub low: BlockNumber,
    /// Block at or right after the timestamp
    pub high: BlockNumber,
}

impl BlockBounds {
    /// Bounds used for a range start that predates the searched blocks
    pub const CHAIN_START: Self = Self { low: 0, high: 0 };

    /// Creates bounds from `low` and `high`
    pub fn new(low: BlockNumber, high: BlockNumber) -> Self {
        debug_assert!(low <= high, "bounds must be ordered: {low} > {high}");
        Self { low, high }
    }

    /// Creates bounds pinned to a single block
    pub fn exact(block: BlockNumber) -> Self {
        Self {
            low: block,
            high: block,
        }
    }

    /// Returns `true` when both bounds are the same block
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// Returns `true` if `block` lies within the bounds (inclusive)
    pub fn contains(&self, block: BlockNumber) -> bool {
        (self.low..=self.high).contains(&block)
    }
}

/// Inclusive block range answering a timestamp window query
///
/// A range with `start_block > end_block` is inverted and means no block falls
/// inside the window. Resolution returns inverted ranges silently; see
/// [`BlockRangeResolver::resolve_block_range_for_timestamps`](crate::BlockRangeResolver::resolve_block_range_for_timestamps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockRange {
    /// First block of the range (inclusive)
    pub start_block: BlockNumber,
    /// Last block of the range (inclusive)
    pub end_block: BlockNumber,
}

impl BlockRange {
    /// Creates a range. Inverted ranges are allowed.
    pub fn new(start_block: BlockNumber, end_block: BlockNumber) -> Self {
        Self {
            start_block,
            end_block,
        }
    }

    /// Returns `true` when the range is inverted and holds no blocks
    pub fn is_empty(&self) -> bool {
        self.start_block > self.end_block
    }

    /// Returns the number of blocks in the range (inclusive), 0 when inverted
    pub fn block_count(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        self.end_block
            .saturating_sub(self.start_block)
            .saturating_add(1)
    }

    /// Returns `true` if `block` lies within the range (inclusive)
    pub fn contains(&self, block: BlockNumber) -> bool {
        (self.start_block..=self.end_block).contains(&block)
    }
}

/// Block range for a single UTC calendar day
///
/// Captures:
/// - The first block at or after 00:00:00 UTC on the date
/// - The last block at or before 23:59:59 UTC on the date
/// - The UTC timestamps that define the day boundaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBlockRange {
    /// The UTC date
    pub date: NaiveDate,

    /// UTC timestamp at start of day (00:00:00 UTC)
    pub start_ts: u64,

    /// UTC timestamp at start of next day (00:00:00 UTC next day) - exclusive boundary
    pub end_ts_exclusive: u64,

    /// Resolved block range
    pub range: BlockRange,
}

impl DailyBlockRange {
    /// Returns the number of blocks produced during the day
    pub fn block_count(&self) -> u64 {
        self.range.block_count()
    }
}
