use crate::{CalendarDelta, Error, Instant, Unit};
use core::fmt::Display;
use log::{debug, trace};
use wallclock::{Clock, DateTime, SystemClock, EPOCH};

/// The number of ticks between two instants.
///
/// Fixed-length units produce a whole count. Calendar units produce a
/// fractional approximation, since years and months vary in length.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum TickCount {
    Whole(i128),
    Fractional(f64),
}

impl TickCount {
    pub fn as_f64(&self) -> f64 {
        match self {
            TickCount::Whole(v) => *v as f64,
            TickCount::Fractional(v) => *v,
        }
    }

    /// Returns the count if it is a whole number of ticks.
    pub fn whole(&self) -> Option<i128> {
        match self {
            TickCount::Whole(v) => Some(*v),
            TickCount::Fractional(_) => None,
        }
    }
}

impl Display for TickCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickCount::Whole(v) => write!(f, "{v}"),
            TickCount::Fractional(v) => write!(f, "{v}"),
        }
    }
}

impl From<i128> for TickCount {
    fn from(v: i128) -> Self {
        TickCount::Whole(v)
    }
}

impl From<f64> for TickCount {
    fn from(v: f64) -> Self {
        TickCount::Fractional(v)
    }
}

/// Counts ticks between two instants.
///
/// A `TickCounter` holds the defaults used when an argument is omitted: the
/// origin used as `start`, the clock sampled for `end`, and the unit.
///
/// ```
/// use elapsed::{FixedClock, TickCount, TickCounter, Unit};
/// use time::macros::datetime;
///
/// let counter = TickCounter::builder()
///     .clock(FixedClock::new(datetime!(1970-01-02 0:00)))
///     .unit(Unit::Hours)
///     .build();
///
/// assert_eq!(counter.count(None, None), Ok(TickCount::Whole(24)));
/// ```
#[derive(Clone, Debug)]
pub struct TickCounter<C = SystemClock> {
    clock: C,
    origin: Instant,
    unit: Unit,
}

impl TickCounter {
    pub fn builder() -> Builder {
        Builder::new()
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Builder::new().build()
    }
}

impl<C: Clock> TickCounter<C> {
    /// Returns the clock read when `end` is omitted.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the instant used when `start` is omitted.
    pub fn origin(&self) -> Instant {
        self.origin
    }

    /// Returns the unit used by `count()`.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Count ticks in the default unit. See `count_in()`.
    pub fn count(&self, start: Option<Instant>, end: Option<Instant>) -> Result<TickCount, Error> {
        self.count_in(start, end, self.unit)
    }

    /// Count ticks in a unit given by name. The name is validated before
    /// anything else is done, so an unknown name always fails with
    /// `Error::UnsupportedUnit`.
    pub fn count_named(
        &self,
        start: Option<Instant>,
        end: Option<Instant>,
        unit: &str,
    ) -> Result<TickCount, Error> {
        let unit: Unit = unit.parse()?;
        self.count_in(start, end, unit)
    }

    /// Count the ticks of `unit` from `start` until `end`. When `start` is
    /// omitted the origin is used, and when `end` is omitted the clock is read
    /// once.
    ///
    /// The count is negative when `end` precedes `start`. Days, hours,
    /// minutes and seconds are floored, while milliseconds, microseconds and
    /// nanoseconds are truncated toward zero. These agree for positive
    /// intervals and diverge for negative ones: `-1.5s` is `-2` seconds but
    /// `-1500` milliseconds.
    ///
    /// Years and months are approximated from the calendar delta by treating
    /// the remaining days as fractions of a 365-day year or a 30-day month.
    pub fn count_in(
        &self,
        start: Option<Instant>,
        end: Option<Instant>,
        unit: Unit,
    ) -> Result<TickCount, Error> {
        let start = start.unwrap_or(self.origin);
        let end = match end {
            Some(end) => end,
            None => {
                let now = self.clock.now();
                debug!("no end given, using current time: {}", DateTime::from(now));
                now
            }
        };

        let ticks = match unit.nanos() {
            None => {
                let delta = CalendarDelta::between(start, end)?;
                approximate(&delta, unit)
            }
            Some(tick) => {
                let nanos = (end - start).whole_nanoseconds();
                TickCount::Whole(exact(nanos, tick, unit))
            }
        };

        trace!(
            "{ticks} {unit} from {} to {}",
            DateTime::from(start),
            DateTime::from(end)
        );

        Ok(ticks)
    }
}

/// Fractional count of a calendar unit. Hours and smaller are ignored.
fn approximate(delta: &CalendarDelta, unit: Unit) -> TickCount {
    let years = delta.years as f64;
    let months = delta.months as f64;
    let days = delta.days as f64;

    match unit {
        Unit::Months => TickCount::Fractional(years * 12.0 + months + days / 30.0),
        _ => TickCount::Fractional(years + months / 12.0 + days / 365.0),
    }
}

/// Whole count of a fixed-length unit with a tick length of `tick`
/// nanoseconds.
fn exact(nanos: i128, tick: i128, unit: Unit) -> i128 {
    match unit {
        Unit::Milliseconds | Unit::Microseconds | Unit::Nanoseconds => nanos / tick,
        _ => nanos.div_euclid(tick),
    }
}

/// The system clock in the host's local offset, or in UTC when the local
/// offset cannot be determined.
fn local_clock() -> SystemClock {
    match SystemClock::local() {
        Ok(clock) => clock,
        Err(e) => {
            debug!("{e}, reading the system clock in utc");
            SystemClock::utc()
        }
    }
}

/// A builder for `TickCounter`.
pub struct Builder<C = SystemClock> {
    clock: C,
    origin: Instant,
    unit: Unit,
}

impl Builder {
    fn new() -> Self {
        Self {
            clock: local_clock(),
            origin: EPOCH,
            unit: Unit::Seconds,
        }
    }
}

impl<C: Clock> Builder<C> {
    /// Set the clock which is read when no `end` is given. Defaults to the
    /// system clock in the local offset, or UTC if that is unavailable.
    pub fn clock<T: Clock>(self, clock: T) -> Builder<T> {
        Builder {
            clock,
            origin: self.origin,
            unit: self.unit,
        }
    }

    /// Set the instant used when no `start` is given. Defaults to the unix
    /// epoch, `1970-01-01T00:00:00`.
    pub fn origin(mut self, origin: Instant) -> Self {
        self.origin = origin;
        self
    }

    /// Set the unit used by `TickCounter::count()`. Defaults to seconds.
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Consumes this `Builder` and produces a `TickCounter`.
    pub fn build(self) -> TickCounter<C> {
        TickCounter {
            clock: self.clock,
            origin: self.origin,
            unit: self.unit,
        }
    }
}
