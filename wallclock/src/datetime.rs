//! Human readable datetimes.

use core::fmt::Display;

use crate::Instant;

/// Display wrapper which renders an instant as
/// `YYYY-MM-DDTHH:MM:SS.fffffffff`, with no offset since the instant carries
/// none.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime {
    dt: Instant,
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        let date = self.dt.date();
        let time = self.dt.time();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:09}",
            date.year(),
            date.month() as u8,
            date.day(),
            time.hour(),
            time.minute(),
            time.second(),
            time.nanosecond(),
        )
    }
}

impl From<Instant> for DateTime {
    fn from(dt: Instant) -> Self {
        DateTime { dt }
    }
}

impl From<DateTime> for Instant {
    fn from(other: DateTime) -> Self {
        other.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn display() {
        let dt = DateTime::from(datetime!(2021-03-15 04:05:06.007));
        assert_eq!(format!("{dt}"), "2021-03-15T04:05:06.007000000");

        let dt = DateTime::from(crate::EPOCH);
        assert_eq!(dt.to_string(), "1970-01-01T00:00:00.000000000");
    }
}
