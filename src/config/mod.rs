// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for block range resolution
//!
//! # Example: Using defaults
//!
//! ```rust
//! use blockseek::ResolverConfig;
//!
//! // Search from block 1, fold a resolved start block 1 back to genesis
//! let config = ResolverConfig::default();
//! assert_eq!(config.search_start_block, 1);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use blockseek::ResolverConfigBuilder;
//!
//! let config = ResolverConfigBuilder::new()
//!     .search_start_block(0)
//!     .without_genesis_fold()
//!     .concurrent_endpoints(true)
//!     .build();
//! ```

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

/// Block the default configuration starts searching from.
///
/// Genesis blocks on several chains carry a zero or otherwise anomalous
/// timestamp that breaks the monotonic ordering the search relies on.
pub const DEFAULT_SEARCH_START_BLOCK: BlockNumber = 1;

/// Rewrites a resolved range start block
///
/// Pairs with a search start above genesis: when the search floor is block 1,
/// a range starting at block 1 really starts at the chain's beginning, so it is
/// folded back to block 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisFold {
    /// Start block that triggers the fold
    pub from: BlockNumber,
    /// Block the start is rewritten to
    pub to: BlockNumber,
}

impl GenesisFold {
    /// Creates a fold rewriting start block `from` to `to`
    pub fn new(from: BlockNumber, to: BlockNumber) -> Self {
        Self { from, to }
    }

    /// Applies the fold to a start block
    pub fn apply(&self, start_block: BlockNumber) -> BlockNumber {
        if start_block == self.from {
            self.to
        } else {
            start_block
        }
    }
}

impl Default for GenesisFold {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_START_BLOCK, 0)
    }
}

/// Configuration for [`BlockRangeResolver`](crate::BlockRangeResolver)
///
/// Use [`ResolverConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Lowest block of every point search window
    /// Default: 1 (genesis excluded)
    pub search_start_block: BlockNumber,

    /// Rewrite applied to the start block of a resolved range
    /// Default: block 1 folds to block 0
    pub genesis_fold: Option<GenesisFold>,

    /// Resolve both range endpoints concurrently instead of one after the other
    /// Default: false
    pub concurrent_endpoints: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl ResolverConfig {
    /// Config that skips the genesis block during search and folds block 1 back to 0
    pub fn with_common_defaults() -> Self {
        Self {
            search_start_block: DEFAULT_SEARCH_START_BLOCK,
            genesis_fold: Some(GenesisFold::default()),
            concurrent_endpoints: false,
        }
    }

    /// Config for chains whose genesis block has a well-formed timestamp
    ///
    /// Searches from block 0 and never rewrites the start block.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blockseek::ResolverConfig;
    ///
    /// let config = ResolverConfig::from_genesis();
    /// assert_eq!(config.search_start_block, 0);
    /// assert_eq!(config.fold_start_block(1), 1);
    /// ```
    pub fn from_genesis() -> Self {
        Self {
            search_start_block: 0,
            genesis_fold: None,
            concurrent_endpoints: false,
        }
    }

    /// Applies the genesis fold, if any, to a resolved start block
    ///
    /// # Example
    ///
    /// ```rust
    /// use blockseek::ResolverConfig;
    ///
    /// let config = ResolverConfig::default();
    /// assert_eq!(config.fold_start_block(1), 0);
    /// assert_eq!(config.fold_start_block(2), 2);
    /// ```
    pub fn fold_start_block(&self, start_block: BlockNumber) -> BlockNumber {
        self.genesis_fold
            .map_or(start_block, |fold| fold.apply(start_block))
    }
}

/// Builder for [`ResolverConfig`]
///
/// # Example
///
/// ```rust
/// use blockseek::ResolverConfigBuilder;
///
/// let config = ResolverConfigBuilder::with_defaults()
///     .concurrent_endpoints(true)
///     .build();
/// assert!(config.concurrent_endpoints);
/// assert_eq!(config.search_start_block, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl Default for ResolverConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverConfigBuilder {
    /// Create a new builder starting from [`ResolverConfig::from_genesis`]
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::from_genesis(),
        }
    }

    /// Start with common defaults
    ///
    /// Initializes the builder with [`ResolverConfig::with_common_defaults`].
    pub fn with_defaults() -> Self {
        Self {
            config: ResolverConfig::with_common_defaults(),
        }
    }

    /// Set the lowest block of every search window
    pub fn search_start_block(mut self, block: BlockNumber) -> Self {
        self.config.search_start_block = block;
        self
    }

    /// Fold a resolved start block `from` to `to`
    pub fn genesis_fold(mut self, from: BlockNumber, to: BlockNumber) -> Self {
        self.config.genesis_fold = Some(GenesisFold::new(from, to));
        self
    }

    /// Never rewrite the resolved start block
    pub fn without_genesis_fold(mut self) -> Self {
        self.config.genesis_fold = None;
        self
    }

    /// Resolve both range endpoints concurrently
    pub fn concurrent_endpoints(mut self, enabled: bool) -> Self {
        self.config.concurrent_endpoints = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ResolverConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResolverConfig::default();
        assert_eq!(config.search_start_block, 1);
        assert_eq!(config.genesis_fold, Some(GenesisFold::new(1, 0)));
        assert!(!config.concurrent_endpoints);
    }

    #[test]
    fn test_fold_only_touches_matching_block() {
        let fold = GenesisFold::new(3, 0);
        assert_eq!(fold.apply(3), 0);
        assert_eq!(fold.apply(0), 0);
        assert_eq!(fold.apply(4), 4);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ResolverConfigBuilder::with_defaults()
            .search_start_block(100)
            .genesis_fold(100, 0)
            .build();
        assert_eq!(config.search_start_block, 100);
        assert_eq!(config.fold_start_block(100), 0);
        assert_eq!(config.fold_start_block(1), 1);

        let config = ResolverConfigBuilder::with_defaults()
            .without_genesis_fold()
            .build();
        assert_eq!(config.fold_start_block(1), 1);
    }

    #[test]
    fn test_builder_new_starts_from_genesis() {
        assert_eq!(
            ResolverConfigBuilder::new().build(),
            ResolverConfig::from_genesis()
        );
        assert_eq!(ResolverConfigBuilder::default().build().search_start_block, 0);
    }

    #[test]
    fn test_config_serialization() {
        let json = serde_json::to_value(ResolverConfig::default()).unwrap();
        assert_eq!(json["search_start_block"], 1);
        assert_eq!(json["genesis_fold"]["from"], 1);
        assert_eq!(json["genesis_fold"]["to"], 0);
        assert_eq!(json["concurrent_endpoints"], false);
    }
}
