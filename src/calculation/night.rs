//! Night-differential allocation.
//!
//! Worked time is consumed in chronological order: the normal bucket first,
//! then the 50% bucket, then the 100% bucket. Night minutes are attributed
//! to whichever bucket was consuming the minutes they fall in.

use serde::{Deserialize, Serialize};

use super::buckets::MinuteBuckets;
use super::options::NightAllocation;
use super::window::{MinuteRange, TimeWindow, WorkSegment};

/// Night minutes of a day and the bucket each one landed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightSplit {
    /// All night minutes of the day.
    pub total: u32,
    /// Night minutes in the normal bucket.
    pub in_normal: u32,
    /// Night minutes in the 50% bucket.
    pub in_extra50: u32,
    /// Night minutes in the 100% bucket.
    pub in_extra100: u32,
}

impl NightSplit {
    fn from_buckets(night: [u32; 3]) -> Self {
        Self {
            total: night.iter().sum(),
            in_normal: night[0],
            in_extra50: night[1],
            in_extra100: night[2],
        }
    }
}

/// Attributes the night minutes of `segments` to the pay buckets.
///
/// `segments` must be in chronological order and `buckets` must hold the
/// day's worked minutes, so that every worked minute is consumed exactly
/// once. In both modes `total` equals the overlap of the segments with the
/// window, and no bucket receives more night minutes than it holds.
///
/// # Examples
///
/// ```
/// use ponto_engine::calculation::{
///     allocate_night_minutes, classify_minutes, NightAllocation, WorkSegment,
///     DEFAULT_NIGHT_WINDOW,
/// };
///
/// // 22:00 -> 06:00 with no break
/// let segments = [WorkSegment::between(1320, 360)];
/// let buckets = classify_minutes(480, 440, 120, false);
/// let night = allocate_night_minutes(
///     &segments,
///     &buckets,
///     &DEFAULT_NIGHT_WINDOW,
///     NightAllocation::Chronological,
/// );
/// assert_eq!(night.total, 420);
/// assert_eq!(night.in_normal, 420);
/// ```
pub fn allocate_night_minutes(
    segments: &[WorkSegment],
    buckets: &MinuteBuckets,
    window: &TimeWindow,
    mode: NightAllocation,
) -> NightSplit {
    let mut remaining = [buckets.normal, buckets.extra50, buckets.extra100];
    let mut night = [0u32; 3];

    for piece in segments.iter().flat_map(WorkSegment::pieces) {
        let takes = consume_piece(&piece, &mut remaining);
        match mode {
            NightAllocation::Chronological => {
                for take in &takes {
                    night[take.bucket] += window.overlap_range(&take.range);
                }
            }
            NightAllocation::Proportional => {
                allocate_proportionally(&piece, &takes, window, &mut night);
            }
        }
    }

    NightSplit::from_buckets(night)
}

/// A stretch of a piece consumed by one bucket.
struct Take {
    bucket: usize,
    range: MinuteRange,
}

fn consume_piece(piece: &MinuteRange, remaining: &mut [u32; 3]) -> Vec<Take> {
    let mut takes = Vec::new();
    let mut offset = 0;

    while offset < piece.len() {
        let Some(bucket) = remaining.iter().position(|&left| left > 0) else {
            break;
        };
        let len = remaining[bucket].min(piece.len() - offset);
        takes.push(Take {
            bucket,
            range: piece.slice(offset, len),
        });
        remaining[bucket] -= len;
        offset += len;
    }

    takes
}

fn allocate_proportionally(
    piece: &MinuteRange,
    takes: &[Take],
    window: &TimeWindow,
    night: &mut [u32; 3],
) {
    let consumed = MinuteRange {
        start: piece.start,
        end: piece.start + takes.iter().map(|t| t.range.len()).sum::<u32>(),
    };
    let piece_night = window.overlap_range(&consumed);
    if piece_night == 0 || consumed.is_empty() {
        return;
    }

    let mut shares: Vec<u32> = takes
        .iter()
        .map(|take| rounded_share(piece_night, take.range.len(), consumed.len()))
        .collect();

    // Shares are rounded half-up, so they can overshoot by a few minutes.
    let mut assigned: u32 = shares.iter().sum();
    for share in shares.iter_mut() {
        if assigned <= piece_night {
            break;
        }
        let cut = (*share).min(assigned - piece_night);
        *share -= cut;
        assigned -= cut;
    }

    // The residual goes to the last consumer, spilling backwards when the
    // last stretch has no room left.
    let mut residual = piece_night - assigned;
    for (take, share) in takes.iter().zip(shares.iter_mut()).rev() {
        if residual == 0 {
            break;
        }
        let room = take.range.len() - *share;
        let add = residual.min(room);
        *share += add;
        residual -= add;
    }

    for (take, share) in takes.iter().zip(shares) {
        night[take.bucket] += share;
    }
}

fn rounded_share(night: u32, taken: u32, length: u32) -> u32 {
    let numerator = u64::from(night) * u64::from(taken);
    let length = u64::from(length);
    // round half up
    ((2 * numerator + length) / (2 * length)) as u32
}
