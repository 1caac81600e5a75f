use super::Reading;
use std::time::{SystemTime, UNIX_EPOCH};

/// Read the realtime clock as seconds and nanoseconds since the unix epoch.
pub fn realtime() -> Reading {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => Reading {
            secs: d.as_secs() as i64,
            nanos: d.subsec_nanos(),
        },
        Err(e) => {
            // the clock is set before the epoch
            let d = e.duration();
            if d.subsec_nanos() == 0 {
                Reading {
                    secs: -(d.as_secs() as i64),
                    nanos: 0,
                }
            } else {
                Reading {
                    secs: -(d.as_secs() as i64) - 1,
                    nanos: 1_000_000_000 - d.subsec_nanos(),
                }
            }
        }
    }
}
