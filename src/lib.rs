// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # blockseek
//!
//! Resolve wall-clock timestamp windows to block-number ranges on chains whose
//! blocks are numbered and timestamped monotonically.
//!
//! Extraction pipelines need "which blocks fall between T1 and T2?" without
//! scanning every block. blockseek answers with a bounded binary search over
//! block timestamps, performing O(log n) block lookups per endpoint.
//!
//! ## Components
//!
//! - [`BlockTimestampOracle`]: Returns `(number, timestamp)` for a block.
//!   [`ProviderOracle`] talks JSON-RPC through alloy, [`InMemoryOracle`] serves a
//!   captured timestamp list, and [`CachedOracle`] memoizes either.
//! - [`BlockRangeResolver`]: Brackets single timestamps
//!   ([`resolve_bounds_for_timestamp`](BlockRangeResolver::resolve_bounds_for_timestamp)),
//!   resolves windows
//!   ([`resolve_block_range_for_timestamps`](BlockRangeResolver::resolve_block_range_for_timestamps))
//!   and UTC days ([`resolve_daily_range`](BlockRangeResolver::resolve_daily_range)).
//! - [`ResolverConfig`]: Search floor and genesis handling.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alloy_chains::NamedChain;
//! use alloy_provider::ProviderBuilder;
//! use blockseek::{BlockRangeResolver, CachedOracle, ProviderOracle};
//!
//! let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
//! let oracle = CachedOracle::new(ProviderOracle::new(NamedChain::Mainnet, provider));
//! let resolver = BlockRangeResolver::new(oracle);
//!
//! let range = resolver
//!     .resolve_block_range_for_timestamps(1_700_000_000, 1_700_086_399)
//!     .await?;
//!
//! if range.is_empty() {
//!     println!("No blocks in window");
//! } else {
//!     println!("Blocks {}..={}", range.start_block, range.end_block);
//! }
//! ```
//!
//! ## Genesis handling
//!
//! By default the search window starts at block 1, since genesis blocks often
//! carry anomalous timestamps, and a range resolved to start at block 1 is
//! folded back to block 0. Both are configurable through [`ResolverConfig`].

pub mod blocks;
pub mod cache;
pub mod config;
pub mod errors;
pub mod oracle;
mod tracing;

pub use blocks::{BlockBounds, BlockRange, BlockRangeResolver, DailyBlockRange};
pub use cache::{AccessSequence, CacheStats};
pub use config::{GenesisFold, ResolverConfig, ResolverConfigBuilder, DEFAULT_SEARCH_START_BLOCK};
pub use errors::{BlockseekError, ResolveError, RpcError};
pub use oracle::{
    BlockId, BlockRef, BlockTimestampOracle, CachedOracle, InMemoryOracle, ProviderOracle,
};
