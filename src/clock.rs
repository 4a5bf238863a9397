//! Monotonic millisecond time source.
//!
//! Timestamps are `u32` milliseconds and are allowed to wrap (~49.7 days).
//! Every comparison goes through the helpers below so wraparound is
//! handled by modular arithmetic instead of ordering.

/// A monotonic millisecond counter.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Milliseconds elapsed from `since` to `now`, tolerant of counter wraparound.
pub fn elapsed_ms(since: u32, now: u32) -> u32 {
    now.wrapping_sub(since)
}

/// True once `now` is at or past `deadline`.
///
/// Valid as long as the two instants are less than 2^31 ms apart.
pub fn deadline_reached(deadline: u32, now: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}

/// Clock backed by the embassy time driver.
#[cfg(feature = "embassy")]
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

#[cfg(feature = "embassy")]
impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the intended wraparound.
        embassy_time::Instant::now().as_millis() as u32
    }
}
