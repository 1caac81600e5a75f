use crate::Error;
use core::fmt::Display;
use core::str::FromStr;

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SEC: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;

/// The granularity in which ticks are counted.
///
/// `Years` and `Months` are calendar units with a variable length. All other
/// units have a fixed length in nanoseconds.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    #[default]
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl Unit {
    /// Every unit, largest first.
    pub const ALL: [Unit; 9] = [
        Unit::Years,
        Unit::Months,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
        Unit::Milliseconds,
        Unit::Microseconds,
        Unit::Nanoseconds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Milliseconds => "milliseconds",
            Unit::Microseconds => "microseconds",
            Unit::Nanoseconds => "nanoseconds",
        }
    }

    /// Returns true for units whose length depends on where they fall in the
    /// calendar.
    pub fn is_calendar(&self) -> bool {
        matches!(self, Unit::Years | Unit::Months)
    }

    /// Returns the length of a single tick in nanoseconds, or `None` for
    /// calendar units.
    pub fn nanos(&self) -> Option<i128> {
        match self {
            Unit::Years | Unit::Months => None,
            Unit::Days => Some(NANOS_PER_DAY),
            Unit::Hours => Some(NANOS_PER_HOUR),
            Unit::Minutes => Some(NANOS_PER_MINUTE),
            Unit::Seconds => Some(NANOS_PER_SEC),
            Unit::Milliseconds => Some(NANOS_PER_MILLI),
            Unit::Microseconds => Some(NANOS_PER_MICRO),
            Unit::Nanoseconds => Some(1),
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .find(|unit| unit.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnsupportedUnit(s.to_owned()))
    }
}

impl TryFrom<&str> for Unit {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for unit in Unit::ALL {
            assert_eq!(unit.as_str().parse::<Unit>(), Ok(unit));
            assert_eq!(Unit::try_from(unit.to_string().as_str()), Ok(unit));
        }

        assert_eq!(
            "bogus".parse::<Unit>(),
            Err(Error::UnsupportedUnit("bogus".to_string()))
        );

        // names are exact, lowercase, and plural
        for name in ["Seconds", "second", " seconds", "year", ""] {
            assert_eq!(
                name.parse::<Unit>(),
                Err(Error::UnsupportedUnit(name.to_string()))
            );
        }
    }

    #[test]
    fn default_is_seconds() {
        assert_eq!(Unit::default(), Unit::Seconds);
    }

    #[test]
    fn lengths() {
        assert_eq!(Unit::Years.nanos(), None);
        assert_eq!(Unit::Months.nanos(), None);
        assert_eq!(Unit::Days.nanos(), Some(86_400 * NANOS_PER_SEC));
        assert_eq!(Unit::Hours.nanos(), Some(3_600 * NANOS_PER_SEC));
        assert_eq!(Unit::Minutes.nanos(), Some(60 * NANOS_PER_SEC));
        assert_eq!(Unit::Nanoseconds.nanos(), Some(1));

        for unit in Unit::ALL {
            assert_eq!(unit.is_calendar(), unit.nanos().is_none());
        }
    }

    #[test]
    fn ordering() {
        // ALL is sorted largest first, and nanos shrink along it
        let mut sorted = Unit::ALL;
        sorted.sort();
        assert_eq!(sorted, Unit::ALL);

        let lengths: Vec<i128> = Unit::ALL.iter().filter_map(|u| u.nanos()).collect();
        assert!(lengths.windows(2).all(|w| w[0] > w[1]));
    }
}
