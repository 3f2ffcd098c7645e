// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Oracle backed by an alloy JSON-RPC provider

use alloy_chains::NamedChain;
use alloy_eips::BlockNumberOrTag;
use alloy_provider::Provider;
use async_trait::async_trait;
use tracing::{debug, Instrument};

use super::{BlockId, BlockRef, BlockTimestampOracle};
use crate::errors::RpcError;
use crate::tracing::spans;

/// Oracle fetching blocks with `eth_getBlockByNumber`
///
/// The chain is injected rather than queried from the provider because some
/// chains don't support `eth_chainId`. It only tags spans and logs.
///
/// Retries, rate limiting and timeouts belong to the provider's transport
/// stack; this oracle makes exactly one call per fetch.
///
/// # Examples
///
/// ```rust,ignore
/// use alloy_chains::NamedChain;
/// use alloy_provider::ProviderBuilder;
/// use blockseek::ProviderOracle;
///
/// let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
/// let oracle = ProviderOracle::new(NamedChain::Arbitrum, provider);
/// ```
#[derive(Debug, Clone)]
pub struct ProviderOracle<P> {
    chain: NamedChain,
    provider: P,
}

impl<P: Provider> ProviderOracle<P> {
    /// Creates an oracle for `chain` backed by `provider`
    pub fn new(chain: NamedChain, provider: P) -> Self {
        Self { chain, provider }
    }

    /// Returns the chain this oracle serves
    pub fn chain(&self) -> NamedChain {
        self.chain
    }

    /// Returns the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

fn block_tag(block: BlockId) -> BlockNumberOrTag {
    match block {
        BlockId::Number(number) => BlockNumberOrTag::Number(number),
        BlockId::Latest => BlockNumberOrTag::Latest,
    }
}

#[async_trait]
impl<P: Provider> BlockTimestampOracle for ProviderOracle<P> {
    async fn fetch_block(&self, block: BlockId) -> Result<BlockRef, RpcError> {
        let span = spans::provider_fetch_block(self.chain, block);

        async move {
            let response = self
                .provider
                .get_block_by_number(block_tag(block))
                .await
                .map_err(|e| RpcError::fetch_failed(block, e))?
                .ok_or(RpcError::BlockNotFound { block })?;

            let block_ref = BlockRef::new(response.header.number, response.header.timestamp);
            debug!(
                chain = %self.chain,
                number = block_ref.number,
                timestamp = block_ref.timestamp,
                "Fetched block from provider"
            );
            Ok(block_ref)
        }
        .instrument(span)
        .await
    }

    fn name(&self) -> &'static str {
        "ProviderOracle"
    }
}
