// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block timestamp oracles.
//!
//! An oracle answers one question: given a block identifier, what are that
//! block's number and timestamp? Resolution is written against the
//! [`BlockTimestampOracle`] trait so the transport stays swappable:
//!
//! - [`ProviderOracle`]: Fetches blocks over JSON-RPC through an alloy `Provider`
//! - [`InMemoryOracle`]: Serves blocks from a list of timestamps (tests, replays)
//! - [`CachedOracle`]: Memoizes numbered blocks fetched through another oracle
//!
//! # Examples
//!
//! ```rust,ignore
//! use alloy_chains::NamedChain;
//! use alloy_provider::ProviderBuilder;
//! use blockseek::{BlockRangeResolver, CachedOracle, ProviderOracle};
//!
//! let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
//! let oracle = CachedOracle::new(ProviderOracle::new(NamedChain::Mainnet, provider))
//!     .with_max_entries(10_000);
//! let resolver = BlockRangeResolver::new(oracle);
//! ```

use alloy_primitives::BlockNumber;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::errors::RpcError;

mod cached;
mod memory;
mod provider;

pub use cached::CachedOracle;
pub use memory::InMemoryOracle;
pub use provider::ProviderOracle;

/// Identifier accepted by an oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockId {
    /// A specific block number
    Number(BlockNumber),
    /// The most recently produced block
    Latest,
}

impl From<BlockNumber> for BlockId {
    fn from(number: BlockNumber) -> Self {
        BlockId::Number(number)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockId::Number(number) => write!(f, "{number}"),
            BlockId::Latest => f.write_str("latest"),
        }
    }
}

/// Immutable snapshot of one block's number and timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockRef {
    /// Block number
    pub number: BlockNumber,
    /// Block timestamp, in the chain's native unit (seconds for EVM chains)
    pub timestamp: u64,
}

impl BlockRef {
    /// Creates a new block reference
    pub fn new(number: BlockNumber, timestamp: u64) -> Self {
        Self { number, timestamp }
    }
}

/// Read-only capability returning `(number, timestamp)` for a block identifier
///
/// Implementations own their transport policy (timeouts, retries). Resolution
/// calls [`fetch_block`](Self::fetch_block) sequentially and propagates any
/// error unchanged.
///
/// Block timestamps are assumed non-decreasing in block number. Nothing
/// checks this; search results on non-monotonic data are unspecified.
#[async_trait]
pub trait BlockTimestampOracle: Send + Sync {
    /// Fetches the number and timestamp of the identified block
    async fn fetch_block(&self, block: BlockId) -> Result<BlockRef, RpcError>;

    /// Returns a human-readable name for this oracle, used in logs
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<O: BlockTimestampOracle + ?Sized> BlockTimestampOracle for Arc<O> {
    async fn fetch_block(&self, block: BlockId) -> Result<BlockRef, RpcError> {
        (**self).fetch_block(block).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

#[async_trait]
impl<O: BlockTimestampOracle + ?Sized> BlockTimestampOracle for Box<O> {
    async fn fetch_block(&self, block: BlockId) -> Result<BlockRef, RpcError> {
        (**self).fetch_block(block).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
