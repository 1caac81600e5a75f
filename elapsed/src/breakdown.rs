use crate::{CalendarDelta, Error, Instant};
use core::fmt::Display;
use log::trace;
use wallclock::DateTime;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const SECS_PER_MONTH: i64 = 30 * SECS_PER_DAY;
const SECS_PER_YEAR: i64 = 365 * SECS_PER_DAY;

/// The calendar-normalized decomposition of an interval.
///
/// Each field is what remains once the larger fields are consumed, so
/// `months` is the months past the last whole year rather than the total
/// number of months. All fields share the sign of the interval.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarBreakdown {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CalendarBreakdown {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Converts the fields back into seconds, treating a year as 365 days and
    /// a month as 30 days. This is exact only when `years` and `months` are
    /// both zero.
    pub fn approx_seconds(&self) -> i64 {
        self.years * SECS_PER_YEAR
            + self.months * SECS_PER_MONTH
            + self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }
}

impl From<CalendarDelta> for CalendarBreakdown {
    fn from(delta: CalendarDelta) -> Self {
        Self {
            years: delta.years,
            months: delta.months,
            days: delta.days,
            hours: delta.hours,
            minutes: delta.minutes,
            seconds: delta.seconds,
        }
    }
}

impl Display for CalendarBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}y {}mo {}d {}h {}m {}s",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Break the interval from `start` until `end` down into years, months,
/// days, hours, minutes and seconds.
///
/// ```
/// use time::macros::datetime;
///
/// let b = elapsed::breakdown(datetime!(2020-01-01 0:00), datetime!(2021-03-15 0:00)).unwrap();
/// assert_eq!((b.years, b.months, b.days), (1, 2, 14));
/// ```
pub fn breakdown(start: Instant, end: Instant) -> Result<CalendarBreakdown, Error> {
    let breakdown = CalendarBreakdown::from(CalendarDelta::between(start, end)?);

    trace!(
        "{breakdown} from {} to {}",
        DateTime::from(start),
        DateTime::from(end)
    );

    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn display() {
        let b = CalendarBreakdown {
            years: 1,
            months: 2,
            days: 14,
            ..Default::default()
        };
        assert_eq!(b.to_string(), "1y 2mo 14d 0h 0m 0s");

        let b = CalendarBreakdown {
            hours: -1,
            seconds: -30,
            ..Default::default()
        };
        assert_eq!(b.to_string(), "0y 0mo 0d -1h 0m -30s");
    }

    #[test]
    fn drops_subsecond() {
        let b = breakdown(datetime!(2020-01-01 0:00), datetime!(2020-01-01 0:00:01.999)).unwrap();
        assert_eq!(
            b,
            CalendarBreakdown {
                seconds: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn approx_seconds() {
        let b = CalendarBreakdown {
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1,
            ..Default::default()
        };
        assert_eq!(b.approx_seconds(), 90_061);

        let b = CalendarBreakdown {
            years: -1,
            months: -1,
            ..Default::default()
        };
        assert_eq!(b.approx_seconds(), -(365 + 30) * 86_400);
    }
}
