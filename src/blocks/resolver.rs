// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Resolution of timestamps and timestamp windows to block numbers
//!
//! Extraction pipelines ask "which blocks fall between wall-clock time T1 and
//! T2?". [`BlockRangeResolver`] answers with two binary searches over block
//! timestamps instead of scanning every block.
//!
//! # Examples
//!
//! ```rust
//! use blockseek::{BlockRangeResolver, InMemoryOracle};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! // Blocks 0..=100, block n produced at 1000 + 10n
//! let resolver = BlockRangeResolver::new(InMemoryOracle::from_fn(100, |n| 1000 + 10 * n));
//!
//! let range = resolver.resolve_block_range_for_timestamps(1000, 1050).await.unwrap();
//! assert_eq!((range.start_block, range.end_block), (0, 5));
//! # }
//! ```

use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use tracing::{debug, info, warn, Instrument};

use crate::blocks::types::{BlockBounds, BlockRange, DailyBlockRange};
use crate::config::ResolverConfig;
use crate::errors::ResolveError;
use crate::oracle::{BlockId, BlockRef, BlockTimestampOracle};
use crate::tracing::spans;

/// Resolves timestamps to block numbers through a [`BlockTimestampOracle`]
///
/// Every operation takes `&self` and keeps no state between calls, so one
/// resolver can serve concurrent queries. Caching, if wanted, belongs in the
/// oracle (see [`CachedOracle`](crate::CachedOracle)).
///
/// # Examples
///
/// ```rust,ignore
/// use blockseek::{BlockRangeResolver, ProviderOracle, ResolverConfig};
///
/// let resolver = BlockRangeResolver::with_config(
///     ProviderOracle::new(NamedChain::Mainnet, provider),
///     ResolverConfig::default(),
/// );
/// let range = resolver
///     .resolve_block_range_for_timestamps(1_700_000_000, 1_700_086_399)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct BlockRangeResolver<O> {
    oracle: O,
    config: ResolverConfig,
}

impl<O: BlockTimestampOracle> BlockRangeResolver<O> {
    /// Creates a resolver with [`ResolverConfig::default`]
    pub fn new(oracle: O) -> Self {
        Self::with_config(oracle, ResolverConfig::default())
    }

    /// Creates a resolver with an explicit configuration
    pub fn with_config(oracle: O, config: ResolverConfig) -> Self {
        Self { oracle, config }
    }

    /// Returns the oracle used for block lookups
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Returns the active configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Brackets `timestamp` between two block numbers
    ///
    /// The search window spans the configured search start block (block 1 by
    /// default) to the latest block. The returned bounds are degenerate when a
    /// window edge or a probed block carries exactly `timestamp`, and two
    /// adjacent blocks straddling it otherwise.
    ///
    /// Performs O(log n) oracle fetches for n blocks in the window.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::OutOfBounds`] if `timestamp` is before the first or
    ///   after the last block of the window, or if the chain tip is below the
    ///   search start block
    /// - [`ResolveError::Oracle`] if a fetch fails
    pub async fn resolve_bounds_for_timestamp(
        &self,
        timestamp: u64,
    ) -> Result<BlockBounds, ResolveError> {
        let span = spans::resolve_bounds_for_timestamp(timestamp, self.oracle.name());

        async move {
            let start = self
                .oracle
                .fetch_block(BlockId::Number(self.config.search_start_block))
                .await?;
            let end = self.oracle.fetch_block(BlockId::Latest).await?;

            if end.number < start.number {
                return Err(out_of_bounds(timestamp, start, end));
            }

            let bounds = self.narrow_bounds(timestamp, start, end).await?;
            debug!(
                timestamp,
                low = bounds.low,
                high = bounds.high,
                "Resolved block bounds for timestamp"
            );
            Ok(bounds)
        }
        .instrument(span)
        .await
    }

    /// Binary search narrowing `[start, end]` around `timestamp`
    ///
    /// Each step halves the window by block number and keeps the half whose
    /// edge timestamps enclose `timestamp`. A probe with `timestamp(middle) ==
    /// timestamp` becomes the new `end` and is returned on the next step.
    async fn narrow_bounds(
        &self,
        timestamp: u64,
        mut start: BlockRef,
        mut end: BlockRef,
    ) -> Result<BlockBounds, ResolveError> {
        loop {
            if timestamp < start.timestamp || timestamp > end.timestamp {
                return Err(out_of_bounds(timestamp, start, end));
            }

            if timestamp == start.timestamp {
                return Ok(BlockBounds::exact(start.number));
            }
            if timestamp == end.timestamp {
                return Ok(BlockBounds::exact(end.number));
            }
            if end.number - start.number <= 1 {
                return Ok(BlockBounds::new(start.number, end.number));
            }

            let middle_number = start.number + (end.number - start.number) / 2;
            let middle = self
                .oracle
                .fetch_block(BlockId::Number(middle_number))
                .await?;
            debug!(
                timestamp,
                start = start.number,
                end = end.number,
                middle = middle.number,
                middle_ts = middle.timestamp,
                "Narrowing search window"
            );

            if middle.timestamp < timestamp {
                start = middle;
            } else {
                end = middle;
            }
        }
    }

    /// Resolves the timestamp window `[start_ts, end_ts]` to an inclusive block range
    ///
    /// The range starts at the upper bound of `start_ts` and ends at the lower
    /// bound of `end_ts`. A `start_ts` earlier than the first searched block is
    /// not an error: the range then starts at block 0. The configured genesis
    /// fold is applied to the start block last (block 1 becomes block 0 by
    /// default).
    ///
    /// The two endpoints are resolved one after the other, or concurrently when
    /// [`ResolverConfig::concurrent_endpoints`] is set. Results are identical.
    ///
    /// The returned range may be inverted (`start_block > end_block`). Callers
    /// must read that as "no blocks in range". Note the asymmetry with
    /// [`ResolveError::EmptyRange`], which is raised only when both endpoints
    /// resolve to the same pair of adjacent blocks.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidRange`] if `start_ts > end_ts`
    /// - [`ResolveError::OutOfBounds`] if `end_ts` is outside the searched blocks
    /// - [`ResolveError::EmptyRange`] if the window lies strictly between two
    ///   adjacent blocks
    /// - [`ResolveError::Oracle`] if a fetch fails
    pub async fn resolve_block_range_for_timestamps(
        &self,
        start_ts: u64,
        end_ts: u64,
    ) -> Result<BlockRange, ResolveError> {
        let span = spans::resolve_block_range_for_timestamps(start_ts, end_ts);

        async move {
            if start_ts > end_ts {
                return Err(ResolveError::InvalidRange { start_ts, end_ts });
            }

            let (start_bounds, end_bounds) = if self.config.concurrent_endpoints {
                let (start_bounds, end_bounds) = futures::join!(
                    self.resolve_start_bounds(start_ts),
                    self.resolve_bounds_for_timestamp(end_ts),
                );
                (start_bounds?, end_bounds?)
            } else {
                let start_bounds = self.resolve_start_bounds(start_ts).await?;
                let end_bounds = self.resolve_bounds_for_timestamp(end_ts).await?;
                (start_bounds, end_bounds)
            };

            if start_bounds == end_bounds && !start_bounds.is_degenerate() {
                return Err(ResolveError::EmptyRange {
                    start_ts,
                    end_ts,
                    low: start_bounds.low,
                    high: start_bounds.high,
                });
            }

            let start_block = self.config.fold_start_block(start_bounds.high);
            let range = BlockRange::new(start_block, end_bounds.low);

            info!(
                start_ts,
                end_ts,
                start_block = range.start_block,
                end_block = range.end_block,
                block_count = range.block_count(),
                "Resolved block range for timestamps"
            );
            Ok(range)
        }
        .instrument(span)
        .await
    }

    /// Resolves the start endpoint, substituting the chain start when it
    /// predates the searched blocks
    async fn resolve_start_bounds(&self, start_ts: u64) -> Result<BlockBounds, ResolveError> {
        match self.resolve_bounds_for_timestamp(start_ts).await {
            Err(e) if e.is_out_of_bounds() => {
                warn!(
                    start_ts,
                    error = %e,
                    "Start timestamp outside searched blocks, starting from block 0"
                );
                Ok(BlockBounds::CHAIN_START)
            }
            other => other,
        }
    }

    /// Resolves the UTC calendar day `date` to a block range
    ///
    /// The day covers `[00:00:00, 23:59:59]` UTC and is resolved with
    /// [`resolve_block_range_for_timestamps`](Self::resolve_block_range_for_timestamps),
    /// so the same errors apply. In particular a day that has not ended yet
    /// fails with [`ResolveError::OutOfBounds`].
    ///
    /// # Errors
    ///
    /// [`ResolveError::InvalidDate`] if the date is before the Unix epoch or
    /// cannot be represented as a UTC timestamp.
    pub async fn resolve_daily_range(
        &self,
        date: NaiveDate,
    ) -> Result<DailyBlockRange, ResolveError> {
        let span = spans::resolve_daily_range(date);

        async move {
            let (start_ts, end_ts_exclusive) = day_bounds(date)?;

            let range = self
                .resolve_block_range_for_timestamps(start_ts, end_ts_exclusive - 1)
                .await?;

            info!(
                date = %date,
                start_block = range.start_block,
                end_block = range.end_block,
                "Resolved daily block range"
            );
            Ok(DailyBlockRange {
                date,
                start_ts,
                end_ts_exclusive,
                range,
            })
        }
        .instrument(span)
        .await
    }
}

fn out_of_bounds(timestamp: u64, first: BlockRef, last: BlockRef) -> ResolveError {
    ResolveError::OutOfBounds {
        timestamp,
        first_block: first.number,
        last_block: last.number,
        first_ts: first.timestamp,
        last_ts: last.timestamp,
    }
}

/// UTC day boundaries as `(start, end_exclusive)` Unix seconds
fn day_bounds(date: NaiveDate) -> Result<(u64, u64), ResolveError> {
    let start_dt = Utc
        .with_ymd_and_hms(date.year(), date.month(), date.day(), 0, 0, 0)
        .single()
        .ok_or_else(|| ResolveError::invalid_date(date))?;
    let end_dt = start_dt
        .checked_add_signed(chrono::TimeDelta::days(1))
        .ok_or_else(|| ResolveError::invalid_date(date))?;

    let start_ts =
        u64::try_from(start_dt.timestamp()).map_err(|_| ResolveError::invalid_date(date))?;
    let end_ts_exclusive =
        u64::try_from(end_dt.timestamp()).map_err(|_| ResolveError::invalid_date(date))?;
    Ok((start_ts, end_ts_exclusive))
}
