//! This crate measures the time elapsed between two instants, either as a
//! count of ticks in a single unit or as a calendar breakdown across years,
//! months, days, hours, minutes and seconds.
//!
//! Instants are naive `time::PrimitiveDateTime`s with no attached offset, and
//! all calendar math follows the proleptic Gregorian calendar.
//!
//! ```
//! use elapsed::{count_ticks, TickCount, Unit};
//! use time::macros::datetime;
//!
//! let start = datetime!(2021-03-15 0:00);
//! let end = datetime!(2021-03-16 1:30);
//!
//! assert_eq!(count_ticks(Some(start), Some(end), Unit::Hours), Ok(TickCount::Whole(25)));
//! assert_eq!(count_ticks(Some(start), Some(end), Unit::Days), Ok(TickCount::Whole(1)));
//! ```

mod breakdown;
mod delta;
mod error;
mod ticks;
mod unit;

pub use breakdown::{breakdown, CalendarBreakdown};
pub use delta::CalendarDelta;
pub use error::Error;
pub use ticks::{Builder, TickCount, TickCounter};
pub use unit::Unit;

pub use wallclock::{Clock, FixedClock, Instant, SystemClock};

/// Count the ticks of `unit` from `start` until `end`.
///
/// When `start` is omitted the unix epoch is used, and when `end` is omitted
/// the system clock is read once in the host's local offset (or UTC if the
/// local offset cannot be determined), matching the naive local epoch. See `TickCounter::count_in()` for
/// how each unit is counted.
pub fn count_ticks(
    start: Option<Instant>,
    end: Option<Instant>,
    unit: Unit,
) -> Result<TickCount, Error> {
    TickCounter::default().count_in(start, end, unit)
}
