// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the blockseek library.
//!
//! The layout mirrors the two layers of the crate:
//!
//! - [`ResolveError`] - Errors from timestamp-to-block resolution
//! - [`RpcError`] - Errors raised by a [`BlockTimestampOracle`](crate::BlockTimestampOracle)
//!   while fetching blocks
//!
//! [`BlockseekError`] unifies both for callers that don't need to tell them apart.
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockseek::{BlockRangeResolver, ResolveError};
//!
//! match resolver.resolve_block_range_for_timestamps(start_ts, end_ts).await {
//!     Ok(range) if range.is_empty() => println!("No blocks in window"),
//!     Ok(range) => println!("Blocks {}..={}", range.start_block, range.end_block),
//!     Err(ResolveError::OutOfBounds { last_ts, .. }) => {
//!         eprintln!("End timestamp is past the chain tip ({last_ts})");
//!     }
//!     Err(ResolveError::Oracle(e)) => eprintln!("RPC failure: {e}"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

mod resolve;
mod rpc;

pub use resolve::ResolveError;
pub use rpc::RpcError;

/// Unified error type for all blockseek operations.
///
/// Module-specific errors convert into it via `From`, so `?` works across layers.
#[derive(Debug, thiserror::Error)]
pub enum BlockseekError {
    /// Error from block range resolution.
    #[error("Resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Error from an oracle used outside of resolution.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::BlockId;

    #[test]
    fn test_unified_error_wraps_resolve_error() {
        let err: BlockseekError = ResolveError::InvalidRange {
            start_ts: 20,
            end_ts: 10,
        }
        .into();
        assert!(matches!(err, BlockseekError::Resolve(_)));
        assert!(err
            .to_string()
            .starts_with("Resolve error: Invalid timestamp range"));
    }

    #[test]
    fn test_unified_error_wraps_rpc_error() {
        let err: BlockseekError = RpcError::BlockNotFound {
            block: BlockId::Latest,
        }
        .into();
        assert_eq!(err.to_string(), "RPC error: Block not found: latest");
    }
}
