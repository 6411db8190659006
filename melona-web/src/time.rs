//! Wall-clock access, browser-side via `js_sys::Date` with a native
//! fallback for server-rendered tests.

use chrono::NaiveDate;

/// Milliseconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Utc::now().timestamp_millis().max(0) as u64
    }
}

/// Today's local calendar date.
///
/// # Panics
/// Panics if the browser reports a date that is not a valid calendar date,
/// which does not happen for real `Date` values.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            now.get_full_year() as i32,
            now.get_month() + 1,
            now.get_date(),
        )
        .expect("browser date should be a valid calendar date")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_ms_is_after_2024() {
        // Jan 1 2024 in ms; a sanity floor for the clock plumbing.
        assert!(now_ms() > 1_704_067_200_000);
    }

    #[test]
    fn today_is_a_plausible_year() {
        let year = chrono::Datelike::year(&today());
        assert!((2024..2100).contains(&year));
    }
}
