use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The span, in whole calendar days, within which a release counts as new.
///
/// The comparison is strict: a record released exactly `days` days before the
/// evaluation date is *outside* the window. Future-dated releases produce a
/// negative day difference and therefore satisfy the window; they are not
/// specially guarded (known edge, not a guaranteed product behavior).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecencyWindow {
    days: i64,
}

impl RecencyWindow {
    /// The stock storefront window: one month.
    pub const DEFAULT_DAYS: i64 = 30;

    pub const fn new(days: i64) -> Self {
        Self { days }
    }

    pub const fn days(self) -> i64 {
        self.days
    }

    /// `today − release_date < days`, calendar-day granularity.
    pub fn contains(self, release_date: NaiveDate, today: NaiveDate) -> bool {
        (today - release_date).num_days() < self.days
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DAYS)
    }
}
