//! Calendar-aware differences between two instants.
//!
//! A `CalendarDelta` expresses `end - start` as whole years and months
//! followed by a remainder of days, hours, minutes and seconds. Months are
//! allocated first by stepping `start` forward (or backward) through the
//! calendar, clamping the day of month to the length of each target month,
//! so `2020-01-31` plus one month is `2020-02-29`.

use crate::{Error, Instant};
use time::{Date, Month, PrimitiveDateTime};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// A proleptic Gregorian difference between two instants.
///
/// Every field except `nanoseconds` carries the sign of the interval, and
/// each is within its natural range once the larger fields are consumed:
/// `months` is in `-11..=11`, `days` is less than the length of the month the
/// remainder falls in, `hours` is in `-23..=23`, and `minutes` and `seconds`
/// are in `-59..=59`.
///
/// Whole seconds are taken by flooring the remainder, so `nanoseconds` is the
/// non-negative sub-second part left over. For an interval of `-1.5s` this
/// gives `seconds: -2` and `nanoseconds: 500_000_000`.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub nanoseconds: u32,
}

impl CalendarDelta {
    /// Computes the calendar difference `end - start`.
    ///
    /// Returns `Error::InvalidInterval` if an intermediate date falls outside
    /// of the representable range.
    pub fn between(start: Instant, end: Instant) -> Result<Self, Error> {
        let mut months = (end.year() - start.year()) * 12
            + (end.month() as i32 - start.month() as i32);

        // step back towards start until the anchor no longer overshoots end
        let step = if end < start { 1 } else { -1 };
        let mut anchor = add_months(start, months)?;
        while (step < 0 && end < anchor) || (step > 0 && end > anchor) {
            months += step;
            anchor = add_months(start, months)?;
        }

        let remainder = (end - anchor).whole_nanoseconds();
        let secs = remainder.div_euclid(NANOS_PER_SEC) as i64;
        let nanoseconds = remainder.rem_euclid(NANOS_PER_SEC) as u32;

        // sign-magnitude normalization, each field keeps the sign of secs
        let minutes = secs / 60;
        let hours = minutes / 60;
        let days = hours / 24;
        let months = months as i64;

        Ok(Self {
            years: months / 12,
            months: months % 12,
            days,
            hours: hours % 24,
            minutes: minutes % 60,
            seconds: secs % 60,
            nanoseconds,
        })
    }

    /// Returns true if every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Calendar month addition. The resulting day of month is clamped to the
/// length of the target month and the time of day is preserved.
fn add_months(instant: Instant, months: i32) -> Result<Instant, Error> {
    let total = instant.year() * 12 + (instant.month() as i32 - 1) + months;
    let year = total.div_euclid(12);
    let month = Month::try_from((total.rem_euclid(12) + 1) as u8)?;
    let day = instant
        .day()
        .min(month.length(year));

    let date = Date::from_calendar_date(year, month, day)?;
    Ok(PrimitiveDateTime::new(date, instant.time()))
}
