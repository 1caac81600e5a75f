/// A raw reading of the realtime clock relative to the unix epoch. `nanos` is
/// always less than one second, so negative readings carry a negative `secs`
/// and a positive `nanos`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    pub secs: i64,
    pub nanos: u32,
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::*;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::*;

#[cfg(not(any(unix, windows)))]
mod fallback;
#[cfg(not(any(unix, windows)))]
pub use fallback::*;
