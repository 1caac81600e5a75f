use std::time::SystemTime;
use wallclock::{Clock, SystemClock, EPOCH};

fn to_unix_ns(t: SystemTime) -> i128 {
    t.duration_since(SystemTime::UNIX_EPOCH).unwrap().as_nanos() as i128
}

#[test]
fn realtime() {
    let clock = SystemClock::utc();

    // the realtime clock may jump backward, so we may need to try a few times
    for _ in 0..5 {
        let t0 = SystemTime::now();
        let t1 = clock.now();
        let t2 = SystemTime::now();
        let t3 = clock.now();
        let t4 = SystemTime::now();

        // convert our times into nanoseconds since the unix epoch
        let ut0 = to_unix_ns(t0);
        let ut1 = (t1 - EPOCH).whole_nanoseconds();
        let ut2 = to_unix_ns(t2);
        let ut3 = (t3 - EPOCH).whole_nanoseconds();
        let ut4 = to_unix_ns(t4);

        // check that the clock has moved forward and not backward
        if t0 < t2 && t2 < t4 {
            // windows reads in 100ns intervals
            let ut0 = ut0 / 100 * 100;
            let ut2 = ut2 / 100 * 100;

            assert!(ut0 <= ut1, "ut0: {ut0} ut1: {ut1}");
            assert!(ut1 <= ut2 + 100, "ut1: {ut1} ut2: {ut2}");
            assert!(ut2 <= ut3 + 100, "ut2: {ut2} ut3: {ut3}");
            assert!(ut3 <= ut4 + 100, "ut3: {ut3} ut4: {ut4}");
        }
    }
}

#[test]
fn local_offset() {
    // the local offset may legitimately be unavailable in a multithreaded
    // test harness, but when it is available it must be within a day of utc
    match SystemClock::local() {
        Ok(clock) => assert!(clock.offset().whole_hours().abs() < 24),
        Err(e) => assert_eq!(e, wallclock::Error::IndeterminateOffset),
    }
}
