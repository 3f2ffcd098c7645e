// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Timestamp-to-block resolution.
//!
//! This module provides functionality for:
//! - Bracketing a single timestamp between block numbers
//! - Resolving timestamp windows to inclusive block ranges
//! - Resolving UTC calendar days to block ranges

pub mod resolver;
pub mod types;

// Re-export public API
pub use resolver::BlockRangeResolver;
pub use types::*;
