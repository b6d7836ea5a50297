use crate::TimeSource;

/// A [`TimeSource`] reading the system wall clock.
///
/// Times before the Unix epoch read as `0`. The clock is not monotonic: if the
/// system time is stepped backwards, so are the timestamps of new IDs.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn current_millis(&self) -> u64 {
        #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
        let elapsed = web_time::SystemTime::now().duration_since(web_time::SystemTime::UNIX_EPOCH);
        #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
        let elapsed = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH);

        elapsed.map_or(0, |d| d.as_millis() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.current_millis() > 1_577_836_800_000);
    }
}
