use super::Reading;

fn read_clock(clock: libc::clockid_t) -> libc::timespec {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    unsafe {
        libc::clock_gettime(clock, &mut ts);
    }

    ts
}

/// Read the realtime clock as seconds and nanoseconds since the unix epoch.
pub fn realtime() -> Reading {
    let ts = read_clock(libc::CLOCK_REALTIME);

    Reading {
        secs: ts.tv_sec as i64,
        nanos: ts.tv_nsec as u32,
    }
}
