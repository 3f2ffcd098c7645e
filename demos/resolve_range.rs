// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Example resolving a timestamp window (or a UTC day) to a block range
//!
//! This example shows how to:
//! 1. Wrap an alloy provider in a cached block timestamp oracle
//! 2. Resolve a Unix timestamp window to an inclusive block range
//! 3. Resolve a whole UTC day when `DAY` is set instead
//!
//! Run with:
//! ```bash
//! CHAIN_ID=1 \
//! RPC_URL=https://eth.llamarpc.com \
//! START_TS=1700000000 \
//! END_TS=1700003600 \
//! cargo run --example resolve_range
//! ```
//!
//! Or for a day:
//! ```bash
//! CHAIN_ID=42161 RPC_URL=https://arb1.arbitrum.io/rpc DAY=2025-10-10 \
//! cargo run --example resolve_range
//! ```
//!
//! Note: CHAIN_ID must be provided as config because some chains (e.g., Avalanche)
//! don't support the eth_chainId RPC method.

use alloy_chains::Chain;
use alloy_provider::ProviderBuilder;
use anyhow::{Context, Result};
use blockseek::{BlockRangeResolver, CachedOracle, ProviderOracle, ResolverConfigBuilder};
use chrono::NaiveDate;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();

    let rpc_url = env::var("RPC_URL").context("RPC_URL environment variable not set")?;
    let chain_id: u64 = env::var("CHAIN_ID")
        .context("CHAIN_ID environment variable not set")?
        .parse()
        .context("CHAIN_ID must be an integer")?;
    let chain = Chain::from_id(chain_id)
        .named()
        .with_context(|| format!("Unknown chain id {chain_id}"))?;

    let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
    let oracle = CachedOracle::new(ProviderOracle::new(chain, provider)).with_max_entries(4_096);
    let config = ResolverConfigBuilder::with_defaults()
        .concurrent_endpoints(true)
        .build();
    let resolver = BlockRangeResolver::with_config(oracle, config);

    if let Ok(day_str) = env::var("DAY") {
        let date = NaiveDate::parse_from_str(&day_str, "%Y-%m-%d")
            .context("Failed to parse DAY (expected format: YYYY-MM-DD)")?;

        info!(chain = %chain, date = %date, "Resolving daily block range");
        let daily = resolver.resolve_daily_range(date).await?;

        println!("\n=== Daily Block Range ===");
        println!("Date: {date}");
        println!(
            "Block range: [{}, {}] (inclusive)",
            daily.range.start_block, daily.range.end_block
        );
        println!("Block count: {}", daily.block_count());
        println!(
            "UTC window: [{}, {})",
            daily.start_ts, daily.end_ts_exclusive
        );
    } else {
        let start_ts: u64 = env::var("START_TS")
            .context("START_TS (or DAY) environment variable not set")?
            .parse()
            .context("START_TS must be a Unix timestamp")?;
        let end_ts: u64 = env::var("END_TS")
            .context("END_TS environment variable not set")?
            .parse()
            .context("END_TS must be a Unix timestamp")?;

        info!(chain = %chain, start_ts, end_ts, "Resolving block range");
        let range = resolver
            .resolve_block_range_for_timestamps(start_ts, end_ts)
            .await?;

        println!("\n=== Block Range ===");
        if range.is_empty() {
            println!("No blocks between {start_ts} and {end_ts}");
        } else {
            println!(
                "Block range: [{}, {}] (inclusive)",
                range.start_block, range.end_block
            );
            println!("Block count: {}", range.block_count());
        }
    }

    println!("Oracle cache: {}", resolver.oracle().stats().await);

    Ok(())
}
