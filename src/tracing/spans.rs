// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for blockseek operations.
//!
//! Telemetry is kept apart from business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here and
//! attaches it with [`tracing::Instrument`]:
//!
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use alloy_chains::NamedChain;
use chrono::NaiveDate;
use tracing::Span;

use crate::oracle::BlockId;

/// Create span for fetching one block through a provider.
///
/// Parent: resolve_bounds_for_timestamp span
/// Children: RPC call to get block
#[inline]
pub(crate) fn provider_fetch_block(chain: NamedChain, block: BlockId) -> Span {
    tracing::trace_span!(
        "blockseek.provider_fetch_block",
        chain_id = %chain,
        block = %block,
    )
}

/// Create span for resolving the block bounds of a single timestamp.
///
/// Parent: resolve_block_range_for_timestamps span, or none when called directly
/// Children: oracle fetches during the binary search
#[inline]
pub(crate) fn resolve_bounds_for_timestamp(timestamp: u64, oracle: &'static str) -> Span {
    tracing::debug_span!(
        "blockseek.resolve_bounds_for_timestamp",
        timestamp = timestamp,
        oracle = oracle,
    )
}

/// Create span for resolving a timestamp window to a block range.
///
/// This is the main public API for range resolution.
///
/// Parent: resolve_daily_range span, or none (root span for this operation)
/// Children: resolve_bounds_for_timestamp spans (one per endpoint)
#[inline]
pub(crate) fn resolve_block_range_for_timestamps(start_ts: u64, end_ts: u64) -> Span {
    tracing::info_span!(
        "blockseek.resolve_block_range_for_timestamps",
        start_ts = start_ts,
        end_ts = end_ts,
    )
}

/// Create span for resolving a UTC calendar day to a block range.
///
/// Parent: None (root span for this operation)
/// Children: resolve_block_range_for_timestamps span
#[inline]
pub(crate) fn resolve_daily_range(date: NaiveDate) -> Span {
    tracing::info_span!("blockseek.resolve_daily_range", date = %date)
}
