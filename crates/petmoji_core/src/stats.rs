//! Aggregate statistics over public generation records.

use crate::{GenerationStatus, Style};
use serde::{Deserialize, Serialize};

/// Per-style record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleCounts {
    /// Count of cute packs
    pub cute: u64,
    /// Count of funny packs
    pub funny: u64,
    /// Count of angry packs
    pub angry: u64,
    /// Count of happy packs
    pub happy: u64,
}

/// Aggregate counts over all public generation records.
///
/// Built from a full scan of `(style, status)` pairs; intended for
/// small-to-moderate record counts, no pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Total public records
    pub total: u64,
    /// Counts per style
    #[serde(rename = "byStyle")]
    pub by_style: StyleCounts,
    /// Records with completed status
    pub completed: u64,
    /// Records with failed status
    pub failed: u64,
}

impl GenerationStats {
    /// Tally stats from an iterator of `(style, status)` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use petmoji_core::{GenerationStats, GenerationStatus, Style};
    ///
    /// let stats = GenerationStats::tally([
    ///     (Style::Cute, GenerationStatus::Completed),
    ///     (Style::Cute, GenerationStatus::Failed),
    ///     (Style::Happy, GenerationStatus::Completed),
    /// ]);
    /// assert_eq!(stats.total, 3);
    /// assert_eq!(stats.by_style.cute, 2);
    /// assert_eq!(stats.completed, 2);
    /// assert_eq!(stats.failed, 1);
    /// ```
    pub fn tally(pairs: impl IntoIterator<Item = (Style, GenerationStatus)>) -> Self {
        let mut stats = Self::default();
        for (style, status) in pairs {
            stats.total += 1;
            match style {
                Style::Cute => stats.by_style.cute += 1,
                Style::Funny => stats.by_style.funny += 1,
                Style::Angry => stats.by_style.angry += 1,
                Style::Happy => stats.by_style.happy += 1,
            }
            match status {
                GenerationStatus::Completed => stats.completed += 1,
                GenerationStatus::Failed => stats.failed += 1,
                GenerationStatus::Processing => {}
            }
        }
        stats
    }
}
