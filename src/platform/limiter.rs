//! Frame pacing

use super::FrameLimiter;

/// No-op limiter for hosts that pace frames themselves
/// (requestAnimationFrame, tests).
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalPacing;

impl FrameLimiter for ExternalPacing {
    fn wait_for_next_frame(&mut self) {}
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::SleepLimiter;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, Instant};

    use super::FrameLimiter;

    /// Sleeps the thread so frames start at a fixed rate.
    ///
    /// If a frame runs late by more than one period the schedule restarts
    /// from now instead of bursting to catch up.
    #[derive(Debug, Clone)]
    pub struct SleepLimiter {
        period: Duration,
        next_frame: Option<Instant>,
    }

    impl SleepLimiter {
        pub fn new(ticks_per_second: u32) -> Self {
            assert!(ticks_per_second > 0, "tick rate must be positive");
            Self {
                period: Duration::from_secs(1) / ticks_per_second,
                next_frame: None,
            }
        }

        pub fn period(&self) -> Duration {
            self.period
        }
    }

    impl FrameLimiter for SleepLimiter {
        fn wait_for_next_frame(&mut self) {
            let now = Instant::now();
            let due = self.next_frame.unwrap_or(now + self.period);
            if due > now {
                std::thread::sleep(due - now);
                self.next_frame = Some(due + self.period);
            } else if now - due > self.period {
                log::trace!("Frame late by {:?}, resetting schedule", now - due);
                self.next_frame = Some(now + self.period);
            } else {
                self.next_frame = Some(due + self.period);
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_period_matches_rate() {
            let limiter = SleepLimiter::new(60);
            assert_eq!(limiter.period(), Duration::from_secs(1) / 60);
        }

        #[test]
        fn test_limiter_paces_frames() {
            let mut limiter = SleepLimiter::new(200);
            let start = Instant::now();
            for _ in 0..4 {
                limiter.wait_for_next_frame();
            }
            // Four frames at 5ms each
            assert!(start.elapsed() >= Duration::from_millis(18));
        }
    }
}
