// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! RPC error types raised by block timestamp oracles.

use alloy_primitives::BlockNumber;

use crate::oracle::BlockId;

/// Errors that can occur while an oracle fetches a block.
///
/// Resolution never retries these; they are wrapped in
/// [`ResolveError::Oracle`](crate::ResolveError::Oracle) and propagated.
///
/// # Examples
///
/// ```rust
/// use blockseek::{BlockId, RpcError};
///
/// let error = RpcError::BlockNotFound {
///     block: BlockId::Number(42),
/// };
/// assert_eq!(error.to_string(), "Block not found: 42");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Block does not exist at the given identifier.
    ///
    /// Usually the number is beyond the chain tip, or the provider hasn't
    /// synced that block yet.
    #[error("Block not found: {block}")]
    BlockNotFound {
        /// Identifier that did not resolve
        block: BlockId,
    },

    /// The RPC call fetching a numbered block failed.
    ///
    /// Unlike `BlockNotFound`, the call itself failed.
    #[error("Failed to fetch block {block_number} details")]
    GetBlockFailed {
        /// The block number we tried to fetch
        block_number: BlockNumber,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The RPC call fetching the latest block failed.
    #[error("Failed to fetch latest block")]
    GetLatestBlockFailed {
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RpcError {
    /// Helper to create a `GetBlockFailed` error from any error type.
    pub fn get_block_failed(
        block_number: BlockNumber,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetBlockFailed {
            block_number,
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetLatestBlockFailed` error from any error type.
    pub fn get_latest_block_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::GetLatestBlockFailed {
            source: Box::new(source),
        }
    }

    /// Helper to create the failure matching a block identifier.
    pub fn fetch_failed(
        block: BlockId,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        match block {
            BlockId::Number(block_number) => Self::get_block_failed(block_number, source),
            BlockId::Latest => Self::get_latest_block_failed(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_fetch_failed_picks_variant() {
        let io = std::io::Error::other("connection reset");
        let err = RpcError::fetch_failed(BlockId::Number(7), io);
        assert!(matches!(
            err,
            RpcError::GetBlockFailed {
                block_number: 7,
                ..
            }
        ));
        assert_eq!(err.to_string(), "Failed to fetch block 7 details");
        assert!(err.source().is_some());

        let io = std::io::Error::other("timeout");
        let err = RpcError::fetch_failed(BlockId::Latest, io);
        assert!(matches!(err, RpcError::GetLatestBlockFailed { .. }));
        assert_eq!(err.source().unwrap().to_string(), "timeout");
    }
}
