// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for cache metadata

/// Monotonic sequence number for deterministic LRU ordering
///
/// Every cache access stamps the entry with the next sequence number; the
/// entry with the lowest number is the least recently used.
///
/// # Examples
///
/// ```
/// use blockseek::AccessSequence;
///
/// let seq1 = AccessSequence::default();
/// let seq2 = seq1.next();
/// assert!(seq1 < seq2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AccessSequence(u64);

impl AccessSequence {
    /// Returns the next sequence number
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}
