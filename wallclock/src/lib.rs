//! This crate provides an injectable source of "now" as a naive calendar
//! instant.
//!
//! The system realtime clock is read directly from the platform and then
//! shifted by a fixed UTC offset before being converted into a
//! `time::PrimitiveDateTime`. Code which needs the current time should take a
//! `Clock` rather than reading the system clock itself, which allows tests to
//! substitute a `FixedClock`.
//!
//! ```
//! use wallclock::{Clock, FixedClock, SystemClock};
//! use time::macros::datetime;
//!
//! let now = SystemClock::utc().now();
//! assert!(now.year() >= 2024);
//!
//! let frozen = FixedClock::new(datetime!(2020-01-01 0:00));
//! assert_eq!(frozen.now(), datetime!(2020-01-01 0:00));
//! ```

pub mod datetime;

mod error;
mod sys;

pub use datetime::DateTime;
pub use error::Error;

use std::sync::Arc;
use time::macros::datetime;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// A naive point in time: a calendar date and a time of day with nanosecond
/// precision and no attached offset.
pub type Instant = PrimitiveDateTime;

/// The unix epoch, `1970-01-01T00:00:00`, as a naive instant.
pub const EPOCH: Instant = datetime!(1970-01-01 0:00);

/// A source of the current instant.
///
/// Each call to `now()` samples the underlying clock exactly once.
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// A `Clock` backed by the system realtime clock.
///
/// As with `std::time::SystemTime`, readings are not guaranteed to be steady.
/// The realtime clock is subject to phase and frequency adjustments, so two
/// successive readings may go backwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    /// A clock which reports wall time in UTC.
    pub const fn utc() -> Self {
        Self {
            offset: UtcOffset::UTC,
        }
    }

    /// A clock which reports wall time shifted by a fixed offset from UTC.
    pub const fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// A clock which reports wall time in the host's current local offset.
    ///
    /// The offset is determined once, here, and is not updated if the host
    /// later changes offset (for example at a daylight saving transition).
    /// Some platforms refuse to report the local offset when the process has
    /// multiple threads, in which case `Error::IndeterminateOffset` is
    /// returned.
    pub fn local() -> Result<Self, Error> {
        let offset = UtcOffset::current_local_offset()?;
        Ok(Self { offset })
    }

    /// Returns the offset applied to readings of this clock.
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        let reading = sys::realtime();
        let utc = OffsetDateTime::UNIX_EPOCH
            + Duration::new(reading.secs, reading.nanos as i32);
        let local = utc.to_offset(self.offset);

        PrimitiveDateTime::new(local.date(), local.time())
    }
}

/// A `Clock` which always returns the same instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FixedClock {
    instant: Instant,
}

impl FixedClock {
    pub const fn new(instant: Instant) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.instant
    }
}
