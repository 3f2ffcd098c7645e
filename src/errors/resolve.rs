// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for block range resolution.

use alloy_primitives::BlockNumber;
use chrono::NaiveDate;

use super::RpcError;

/// Errors that can occur while resolving timestamps to block numbers.
///
/// Only the start endpoint of a range query recovers from
/// [`ResolveError::OutOfBounds`]; every other variant reaches the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The requested start timestamp is after the end timestamp.
    #[error("Invalid timestamp range: start {start_ts} is after end {end_ts}")]
    InvalidRange {
        /// Requested start of the window
        start_ts: u64,
        /// Requested end of the window
        end_ts: u64,
    },

    /// The timestamp lies outside the searched block window.
    ///
    /// The window fields describe the blocks that were being searched when the
    /// timestamp fell outside of them.
    #[error(
        "Timestamp {timestamp} is out of bounds for blocks {first_block}-{last_block}, \
         timestamps {first_ts}-{last_ts}"
    )]
    OutOfBounds {
        /// Timestamp that was being resolved
        timestamp: u64,
        /// Lowest block of the searched window
        first_block: BlockNumber,
        /// Highest block of the searched window
        last_block: BlockNumber,
        /// Timestamp of `first_block`
        first_ts: u64,
        /// Timestamp of `last_block`
        last_ts: u64,
    },

    /// The timestamp window sits strictly between two adjacent blocks.
    #[error(
        "Timestamp range {start_ts}-{end_ts} does not cover any blocks \
         (falls between blocks {low} and {high})"
    )]
    EmptyRange {
        /// Requested start of the window
        start_ts: u64,
        /// Requested end of the window
        end_ts: u64,
        /// Block right before the window
        low: BlockNumber,
        /// Block right after the window
        high: BlockNumber,
    },

    /// A calendar date could not be mapped to a non-negative UTC timestamp.
    #[error("Cannot convert date {date} to a UTC timestamp")]
    InvalidDate {
        /// The offending date
        date: NaiveDate,
    },

    /// The oracle failed to provide a block.
    #[error("Oracle error: {0}")]
    Oracle(#[from] RpcError),
}

impl ResolveError {
    /// Returns `true` for [`ResolveError::OutOfBounds`].
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ResolveError::OutOfBounds { .. })
    }

    /// Create an `InvalidDate` error.
    pub fn invalid_date(date: NaiveDate) -> Self {
        ResolveError::InvalidDate { date }
    }
}
