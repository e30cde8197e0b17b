//! # Day numbers
//!
//! The model measures time as a continuous day count `d` produced by the
//! integer formula
//!
//! ```text
//! d = 367·y − 7·(y + (m+9)/12)/4 + 275·m/9 + D − 730530
//! ```
//!
//! with truncating integer division on every intermediate quotient. `d = 0`
//! falls on 1999-12-31 00:00 UT, so 2000-01-01 00:00 is `d = 1`.
//!
//! Dates are not validated: an out-of-range month or day simply flows through
//! the arithmetic. Callers supply valid calendar dates.
//!
//! [`day_number_from_epoch`] and [`epoch_from_day_number`] bridge the day count
//! with [`hifitime::Epoch`].

use hifitime::{Epoch, Unit};

use crate::constants::{DayNumber, DAY_NUMBER_OFFSET, HOURS_PER_DAY, SECONDS_PER_DAY};

/// Day number of a Gregorian civil date at 00:00 UT.
///
/// Arguments
/// ---------
/// * `day`, `month`, `year` – civil date, not validated.
///
/// Return
/// ------
/// * The day count relative to the model epoch.
pub fn day_number(day: i32, month: i32, year: i32) -> DayNumber {
    let (d, m, y) = (i64::from(day), i64::from(month), i64::from(year));
    (367 * y - 7 * (y + (m + 9) / 12) / 4 + 275 * m / 9 + d - DAY_NUMBER_OFFSET) as f64
}

/// Day number of a civil date at `ut_hours` hours of Universal Time.
pub fn day_number_ut(day: i32, month: i32, year: i32, ut_hours: f64) -> DayNumber {
    day_number(day, month, year) + ut_hours / HOURS_PER_DAY
}

/// Day number of an [`Epoch`], using its UTC Gregorian representation.
pub fn day_number_from_epoch(epoch: Epoch) -> DayNumber {
    let (year, month, day, hour, minute, second, nanos) = epoch.to_gregorian_utc();
    let seconds_of_day = f64::from(hour) * 3600.0
        + f64::from(minute) * 60.0
        + f64::from(second)
        + f64::from(nanos) * 1e-9;

    day_number(i32::from(day), i32::from(month), year) + seconds_of_day / SECONDS_PER_DAY
}

/// UTC [`Epoch`] corresponding to a day number.
///
/// The day count is added to 1999-12-31 00:00 UTC as a continuous duration;
/// leap seconds inserted in between show up in the UTC reading of the result.
pub fn epoch_from_day_number(day: DayNumber) -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(1999, 12, 31) + Unit::Day * day
}

#[cfg(test)]
mod time_test {
    use super::*;

    #[test]
    fn test_day_number_reference_dates() {
        assert_eq!(day_number(9, 9, 1990), -3400.0);
        assert_eq!(day_number(31, 12, 1999), 0.0);
        assert_eq!(day_number(1, 1, 2000), 1.0);
        assert_eq!(day_number(1, 3, 2000), 61.0);
        assert_eq!(day_number(19, 4, 1990), -3543.0);
    }

    #[test]
    fn test_day_number_is_continuous_across_months() {
        assert_eq!(day_number(1, 3, 2024) - day_number(28, 2, 2024), 2.0);
        assert_eq!(day_number(1, 3, 2023) - day_number(28, 2, 2023), 1.0);
        assert_eq!(day_number(1, 1, 2025) - day_number(31, 12, 2024), 1.0);
    }

    #[test]
    fn test_day_number_accepts_invalid_dates() {
        // 32 January is 1 February
        assert_eq!(day_number(32, 1, 2010), day_number(1, 2, 2010));
        assert!(day_number(0, 13, 2010).is_finite());
        assert!(day_number(-5, -3, -400).is_finite());
    }

    #[test]
    fn test_day_number_ut() {
        assert_eq!(day_number_ut(9, 9, 1990, 0.0), -3400.0);
        assert_eq!(day_number_ut(9, 9, 1990, 12.0), -3399.5);
        assert_eq!(day_number_ut(9, 9, 1990, 6.0), -3399.75);
    }

    #[test]
    fn test_epoch_bridge() {
        let epoch = Epoch::from_gregorian_utc_at_midnight(1990, 9, 9);
        assert_eq!(day_number_from_epoch(epoch), day_number(9, 9, 1990));

        let noon = Epoch::from_gregorian_utc_at_noon(2000, 1, 1);
        assert_eq!(day_number_from_epoch(noon), 1.5);

        assert_eq!(day_number_from_epoch(epoch_from_day_number(1.5)), 1.5);
        assert_eq!(day_number_from_epoch(epoch_from_day_number(10.25)), 10.25);
        assert_eq!(
            epoch_from_day_number(0.0),
            Epoch::from_gregorian_utc_at_midnight(1999, 12, 31)
        );
    }
}
