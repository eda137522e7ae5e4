//! Minute ranges and night-window overlap.
//!
//! Worked segments and the night window may both wrap past midnight. Each
//! is split into at most two non-wrapping half-open ranges inside
//! `0..1440`, and overlaps are summed pairwise.

use serde::{Deserialize, Serialize};

use super::clock::{MINUTES_PER_DAY, minutes_between};

/// A half-open range of minutes `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteRange {
    /// First minute in the range.
    pub start: u32,
    /// One past the last minute in the range.
    pub end: u32,
}

impl MinuteRange {
    /// Number of minutes in the range.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the range holds no minutes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Minutes shared with another range.
    pub fn overlap(&self, other: &MinuteRange) -> u32 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        end.saturating_sub(start)
    }

    /// Sub-range of `len` minutes starting `offset` minutes in.
    pub fn slice(&self, offset: u32, len: u32) -> MinuteRange {
        let start = (self.start + offset).min(self.end);
        MinuteRange {
            start,
            end: (start + len).min(self.end),
        }
    }
}

/// A continuous stretch of worked time.
///
/// `start` is a minute of day; `length` may carry the segment past
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSegment {
    /// Minute of day the segment starts.
    pub start: u32,
    /// Length in minutes.
    pub length: u32,
}

impl WorkSegment {
    /// Builds the segment between two punches, wrapping past midnight when
    /// `end < start`.
    pub fn between(start: u32, end: u32) -> Self {
        Self {
            start,
            length: minutes_between(start, end),
        }
    }

    /// Splits the segment at midnight into chronological pieces: the
    /// evening piece first, then the piece on the following day.
    pub fn pieces(&self) -> Vec<MinuteRange> {
        if self.length == 0 {
            return Vec::new();
        }
        let end = self.start + self.length;
        if end <= MINUTES_PER_DAY {
            vec![MinuteRange {
                start: self.start,
                end,
            }]
        } else {
            vec![
                MinuteRange {
                    start: self.start,
                    end: MINUTES_PER_DAY,
                },
                MinuteRange {
                    start: 0,
                    end: end - MINUTES_PER_DAY,
                },
            ]
        }
    }
}

/// A daily time window given by its first and last minute, both inclusive.
///
/// The default night window `22:00..=04:59` wraps and covers 420 minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First minute inside the window.
    pub start: u32,
    /// Last minute inside the window.
    pub end_inclusive: u32,
}

impl TimeWindow {
    /// Splits the window into non-wrapping half-open ranges.
    pub fn pieces(&self) -> Vec<MinuteRange> {
        if self.end_inclusive >= self.start {
            vec![MinuteRange {
                start: self.start,
                end: self.end_inclusive + 1,
            }]
        } else {
            vec![
                MinuteRange {
                    start: self.start,
                    end: MINUTES_PER_DAY,
                },
                MinuteRange {
                    start: 0,
                    end: self.end_inclusive + 1,
                },
            ]
        }
    }

    /// Minutes of a single-day range that fall inside the window.
    pub fn overlap_range(&self, range: &MinuteRange) -> u32 {
        self.pieces().iter().map(|w| w.overlap(range)).sum()
    }

    /// Minutes of a worked segment that fall inside the window.
    ///
    /// # Examples
    ///
    /// ```
    /// use ponto_engine::calculation::{TimeWindow, WorkSegment};
    ///
    /// let night = TimeWindow { start: 22 * 60, end_inclusive: 4 * 60 + 59 };
    /// // 22:00 -> 06:00
    /// assert_eq!(night.overlap_segment(&WorkSegment::between(1320, 360)), 420);
    /// // 08:00 -> 18:00
    /// assert_eq!(night.overlap_segment(&WorkSegment::between(480, 1080)), 0);
    /// ```
    pub fn overlap_segment(&self, segment: &WorkSegment) -> u32 {
        segment
            .pieces()
            .iter()
            .map(|piece| self.overlap_range(piece))
            .sum()
    }
}
