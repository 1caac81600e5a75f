#![cfg(feature = "serde")]

use elapsed::{breakdown, CalendarBreakdown, TickCount, Unit};
use time::macros::datetime;

#[test]
fn unit_names() {
    for unit in Unit::ALL {
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, format!("\"{}\"", unit.as_str()));
        assert_eq!(serde_json::from_str::<Unit>(&json).unwrap(), unit);
    }

    assert!(serde_json::from_str::<Unit>("\"Seconds\"").is_err());
    assert!(serde_json::from_str::<Unit>("\"bogus\"").is_err());
}

#[test]
fn tick_count_is_untagged() {
    assert_eq!(serde_json::to_string(&TickCount::Whole(-1_500)).unwrap(), "-1500");
    assert_eq!(serde_json::to_string(&TickCount::Fractional(14.5)).unwrap(), "14.5");

    assert_eq!(
        serde_json::from_str::<TickCount>("1.25").unwrap(),
        TickCount::Fractional(1.25)
    );
}

#[test]
fn breakdown_fields() {
    let b = breakdown(datetime!(2020-01-01 0:00), datetime!(2021-03-15 0:00)).unwrap();
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(
        json,
        r#"{"years":1,"months":2,"days":14,"hours":0,"minutes":0,"seconds":0}"#
    );
    assert_eq!(serde_json::from_str::<CalendarBreakdown>(&json).unwrap(), b);
}
