use super::Reading;
use winapi::shared::minwindef::FILETIME;

// FILETIME counts 100ns intervals since 1601-01-01
const UNIX_EPOCH_INTERVALS: i64 = 116_444_736_000_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_INTERVAL: i64 = 100;
const INTERVALS_PER_SEC: i64 = NANOS_PER_SEC / NANOS_PER_INTERVAL;

fn unix_intervals() -> i64 {
    let filetime;
    unsafe {
        let mut ft: FILETIME = core::mem::zeroed();
        winapi::um::sysinfoapi::GetSystemTimePreciseAsFileTime(&mut ft);
        filetime = (((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64) as i64;
    }

    filetime - UNIX_EPOCH_INTERVALS
}

/// Read the realtime clock as seconds and nanoseconds since the unix epoch.
pub fn realtime() -> Reading {
    let intervals = unix_intervals();

    Reading {
        secs: intervals.div_euclid(INTERVALS_PER_SEC),
        nanos: (intervals.rem_euclid(INTERVALS_PER_SEC) * NANOS_PER_INTERVAL) as u32,
    }
}
