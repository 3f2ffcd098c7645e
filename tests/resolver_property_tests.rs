// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for timestamp resolution
//!
//! These tests use proptest to validate search invariants across randomly
//! generated chains with strictly increasing, irregularly spaced timestamps.

mod helpers;

use blockseek::{BlockRangeResolver, InMemoryOracle, ResolveError, ResolverConfig};
use helpers::block_on;
use proptest::prelude::*;

// Helper to generate strictly increasing block timestamps (at least 2 blocks)
fn arb_timestamps() -> impl Strategy<Value = Vec<u64>> {
    (0u64..1_000_000, prop::collection::vec(1u64..=30, 1..300)).prop_map(|(base, gaps)| {
        let mut timestamps = Vec::with_capacity(gaps.len() + 1);
        let mut ts = base;
        timestamps.push(ts);
        for gap in gaps {
            ts += gap;
            timestamps.push(ts);
        }
        timestamps
    })
}

// Resolver searching the whole chain, genesis included, without start folding
fn full_chain_resolver(timestamps: &[u64]) -> BlockRangeResolver<InMemoryOracle> {
    BlockRangeResolver::with_config(
        InMemoryOracle::new(timestamps.to_vec()),
        ResolverConfig::from_genesis(),
    )
}

// Picks a timestamp anywhere in the chain's span
fn span_point(timestamps: &[u64], offset: u64) -> u64 {
    let first = timestamps[0];
    let last = timestamps[timestamps.len() - 1];
    first + offset % (last - first + 1)
}

proptest! {
    /// Property: Every searched block's own timestamp resolves exactly to that block
    #[test]
    fn prop_block_timestamp_resolves_to_block(
        timestamps in arb_timestamps(),
        index in any::<prop::sample::Index>(),
    ) {
        // Default config searches from block 1
        let block = 1 + index.index(timestamps.len() - 1);
        let resolver = BlockRangeResolver::new(InMemoryOracle::new(timestamps.clone()));

        let bounds = block_on(resolver.resolve_bounds_for_timestamp(timestamps[block]))
            .unwrap();

        prop_assert!(bounds.contains(block as u64));
        prop_assert!(bounds.is_degenerate());
    }

    /// Property: Bounds bracket the timestamp with adjacent or identical blocks
    #[test]
    fn prop_bounds_bracket_timestamp(
        timestamps in arb_timestamps(),
        offset in any::<u64>(),
    ) {
        let ts = span_point(&timestamps, offset);
        let resolver = full_chain_resolver(&timestamps);

        let bounds = block_on(resolver.resolve_bounds_for_timestamp(ts)).unwrap();

        prop_assert!(bounds.low <= bounds.high);
        prop_assert!(bounds.high - bounds.low <= 1);
        prop_assert!(timestamps[bounds.low as usize] <= ts);
        prop_assert!(ts <= timestamps[bounds.high as usize]);
    }

    /// Property: Later timestamps never resolve to an earlier low bound
    #[test]
    fn prop_low_bound_is_monotonic(
        timestamps in arb_timestamps(),
        a in any::<u64>(),
        b in any::<u64>(),
    ) {
        let (t1, t2) = {
            let x = span_point(&timestamps, a);
            let y = span_point(&timestamps, b);
            (x.min(y), x.max(y))
        };
        let resolver = full_chain_resolver(&timestamps);

        let first = block_on(resolver.resolve_bounds_for_timestamp(t1)).unwrap();
        let second = block_on(resolver.resolve_bounds_for_timestamp(t2)).unwrap();

        prop_assert!(first.low <= second.low);
    }

    /// Property: Resolving the same timestamp twice yields identical bounds
    #[test]
    fn prop_resolution_is_idempotent(
        timestamps in arb_timestamps(),
        offset in any::<u64>(),
    ) {
        let ts = span_point(&timestamps, offset);
        let resolver = full_chain_resolver(&timestamps);

        let first = block_on(resolver.resolve_bounds_for_timestamp(ts)).unwrap();
        let second = block_on(resolver.resolve_bounds_for_timestamp(ts)).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Property: A resolved range holds exactly the blocks stamped inside the window,
    /// and the window is reported empty exactly when no block falls inside it
    #[test]
    fn prop_range_matches_linear_scan(
        timestamps in arb_timestamps(),
        a in any::<u64>(),
        b in any::<u64>(),
    ) {
        let x = span_point(&timestamps, a);
        let y = span_point(&timestamps, b);
        let (start_ts, end_ts) = (x.min(y), x.max(y));
        let resolver = full_chain_resolver(&timestamps);

        let inside: Vec<u64> = timestamps
            .iter()
            .enumerate()
            .filter(|(_, ts)| (start_ts..=end_ts).contains(*ts))
            .map(|(n, _)| n as u64)
            .collect();

        match block_on(resolver.resolve_block_range_for_timestamps(start_ts, end_ts)) {
            Ok(range) => {
                prop_assert!(!inside.is_empty());
                prop_assert_eq!(range.start_block, inside[0]);
                prop_assert_eq!(range.end_block, inside[inside.len() - 1]);
            }
            Err(ResolveError::EmptyRange { .. }) => prop_assert!(inside.is_empty()),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    /// Property: Reversed windows are always rejected
    #[test]
    fn prop_reversed_window_is_invalid(
        timestamps in arb_timestamps(),
        start_ts in 1u64..u64::MAX,
        delta in 1u64..1_000,
    ) {
        let end_ts = start_ts.saturating_sub(delta);
        let resolver = full_chain_resolver(&timestamps);

        let result = block_on(resolver.resolve_block_range_for_timestamps(start_ts, end_ts));
        let is_invalid_range = matches!(result, Err(ResolveError::InvalidRange { .. }));
        prop_assert!(is_invalid_range);
    }
}
