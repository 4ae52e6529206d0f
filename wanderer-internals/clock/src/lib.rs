//! Wanderer Clock
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! wanderer-internals/clock
//! An injectable source of "today" so date-relative validation stays deterministic under test

use chrono::NaiveDate;

/// A source of the current calendar date.
///
/// Production code uses [`SystemClock`]; tests pin a date with
/// [`FixedClock`] so rules defined relative to "now" give stable results.
///
/// # Examples
///
/// ```ignore
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
/// ```
pub trait Clock: Send + Sync {
    /// The current date in the host's local timezone.
    fn today(&self) -> NaiveDate;
}

/// Reads the host wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same pinned date.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
