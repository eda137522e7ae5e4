//! Daily overtime classification.
//!
//! This module splits a day's worked minutes into the normal, 50% and 100%
//! buckets, with the holiday override that pays the whole day at 100%.

use serde::{Deserialize, Serialize};

/// Default standard day in minutes (7h20, a 220-hour month over ~30 days).
pub const DEFAULT_STANDARD_DAILY_MINUTES: u32 = 440;

/// Default daily overtime paid at 50% before the 100% tier starts.
pub const DEFAULT_OVERTIME50_CAP: u32 = 120;

/// Worked minutes of a day split by pay tier.
///
/// The three buckets always add up to the day's worked minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteBuckets {
    /// Minutes up to the standard day.
    pub normal: u32,
    /// First overtime minutes, up to the 50% cap.
    pub extra50: u32,
    /// Overtime beyond the cap, or the whole day on a holiday.
    pub extra100: u32,
}

impl MinuteBuckets {
    /// Sum of the three buckets.
    pub fn total(&self) -> u32 {
        self.normal + self.extra50 + self.extra100
    }
}

/// Classifies a day's worked minutes into pay buckets.
///
/// # Arguments
///
/// * `worked` - Total worked minutes for the day
/// * `standard_daily_minutes` - Minutes paid at the normal rate
/// * `overtime50_cap` - Overtime minutes paid at 50% before the 100% tier
/// * `is_holiday` - Whether the holiday override applies
///
/// # Examples
///
/// ```
/// use ponto_engine::calculation::classify_minutes;
///
/// let buckets = classify_minutes(540, 440, 120, false);
/// assert_eq!((buckets.normal, buckets.extra50, buckets.extra100), (440, 100, 0));
///
/// let holiday = classify_minutes(540, 440, 120, true);
/// assert_eq!((holiday.normal, holiday.extra50, holiday.extra100), (0, 0, 540));
/// ```
pub fn classify_minutes(
    worked: u32,
    standard_daily_minutes: u32,
    overtime50_cap: u32,
    is_holiday: bool,
) -> MinuteBuckets {
    if is_holiday {
        return MinuteBuckets {
            normal: 0,
            extra50: 0,
            extra100: worked,
        };
    }

    let normal = worked.min(standard_daily_minutes);
    let overtime = worked.saturating_sub(standard_daily_minutes);
    let extra50 = overtime.min(overtime50_cap);

    MinuteBuckets {
        normal,
        extra50,
        extra100: overtime - extra50,
    }
}
