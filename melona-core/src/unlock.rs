//! Day-by-day unlock calendar
//!
//! Each ticket unlocks one day after the previous one, counted from the
//! campaign start (February 14 of the current calendar year). The unlock
//! computation depends only on a ticket's position in the full catalog.

use chrono::{Datelike, Days, NaiveDate};

/// Month of the campaign start (February).
pub const CAMPAIGN_START_MONTH: u32 = 2;
/// Day of the campaign start (the 14th).
pub const CAMPAIGN_START_DAY: u32 = 14;

/// Startup configuration for the unlock calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnlockConfig {
    /// Force every ticket unlocked, bypassing the schedule entirely.
    /// Operator/testing escape hatch; injected once at construction.
    pub force_unlocked: bool,
}

/// Lock state of a single ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockStatus {
    pub locked: bool,
    pub unlock_date: NaiveDate,
}

/// Decides whether a catalog position is accessible on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockCalendar {
    start: NaiveDate,
    force_unlocked: bool,
}

impl UnlockCalendar {
    /// Build the calendar for the year containing `today`.
    ///
    /// # Panics
    ///
    /// Panics only if February 14 does not exist in `today`'s year, which
    /// cannot happen for any Gregorian year.
    #[must_use]
    pub fn new(today: NaiveDate, config: &UnlockConfig) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year(), CAMPAIGN_START_MONTH, CAMPAIGN_START_DAY)
            .expect("February 14 exists in every year");
        Self {
            start,
            force_unlocked: config.force_unlocked,
        }
    }

    #[must_use]
    pub const fn campaign_start(&self) -> NaiveDate {
        self.start
    }

    /// Unlock date for a catalog position: start + `position` days.
    ///
    /// There is no upper bound check; positions far beyond the catalog size
    /// simply compute far-future dates, saturating at chrono's maximum.
    #[must_use]
    pub fn unlock_date(&self, position: usize) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(position as u64))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Lock state for a catalog position on `today`.
    ///
    /// A ticket is locked while `today` is strictly before its unlock date;
    /// it becomes accessible on the unlock date itself. Comparison is
    /// date-only by construction.
    #[must_use]
    pub fn status(&self, position: usize, today: NaiveDate) -> UnlockStatus {
        let unlock_date = self.unlock_date(position);
        UnlockStatus {
            locked: !self.force_unlocked && today < unlock_date,
            unlock_date,
        }
    }
}

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Display string for an unlock date, `es-ES` style ("14 de febrero").
#[must_use]
pub fn spanish_date(date: NaiveDate) -> String {
    let month = SPANISH_MONTHS[date.month0() as usize];
    format!("{} de {}", date.day(), month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn campaign_starts_february_14_of_current_year() {
        let calendar = UnlockCalendar::new(date(2025, 1, 3), &UnlockConfig::default());
        assert_eq!(calendar.campaign_start(), date(2025, 2, 14));

        let next_year = UnlockCalendar::new(date(2026, 11, 30), &UnlockConfig::default());
        assert_eq!(next_year.campaign_start(), date(2026, 2, 14));
    }

    #[test]
    fn unlock_dates_advance_one_day_per_position() {
        let calendar = UnlockCalendar::new(date(2025, 2, 14), &UnlockConfig::default());
        assert_eq!(calendar.unlock_date(0), date(2025, 2, 14));
        assert_eq!(calendar.unlock_date(3), date(2025, 2, 17));
        // Crosses the February boundary without special-casing
        assert_eq!(calendar.unlock_date(15), date(2025, 3, 1));
    }

    #[test]
    fn ticket_unlocks_on_its_unlock_date() {
        let calendar = UnlockCalendar::new(date(2025, 2, 14), &UnlockConfig::default());

        let day_before = calendar.status(3, date(2025, 2, 16));
        assert!(day_before.locked);
        assert_eq!(day_before.unlock_date, date(2025, 2, 17));

        let on_the_day = calendar.status(3, date(2025, 2, 17));
        assert!(!on_the_day.locked);

        let day_after = calendar.status(3, date(2025, 2, 18));
        assert!(!day_after.locked);
    }

    #[test]
    fn position_zero_is_open_on_campaign_start() {
        let calendar = UnlockCalendar::new(date(2025, 2, 14), &UnlockConfig::default());
        assert!(!calendar.status(0, date(2025, 2, 14)).locked);
        assert!(calendar.status(0, date(2025, 2, 13)).locked);
    }

    #[test]
    fn force_unlocked_opens_everything() {
        let config = UnlockConfig {
            force_unlocked: true,
        };
        let calendar = UnlockCalendar::new(date(2025, 1, 1), &config);
        assert!(!calendar.status(0, date(2025, 1, 1)).locked);
        assert!(!calendar.status(365, date(2025, 1, 1)).locked);
        // The schedule itself is still reported
        assert_eq!(calendar.status(1, date(2025, 1, 1)).unlock_date, date(2025, 2, 15));
    }

    #[test]
    fn far_positions_saturate_instead_of_overflowing() {
        let calendar = UnlockCalendar::new(date(2025, 2, 14), &UnlockConfig::default());
        let status = calendar.status(usize::MAX, date(2025, 2, 14));
        assert!(status.locked);
        assert_eq!(status.unlock_date, NaiveDate::MAX);
    }

    #[test]
    fn spanish_date_formats_day_and_month() {
        assert_eq!(spanish_date(date(2025, 2, 14)), "14 de febrero");
        assert_eq!(spanish_date(date(2025, 3, 1)), "1 de marzo");
        assert_eq!(spanish_date(date(2025, 12, 31)), "31 de diciembre");
    }
}
