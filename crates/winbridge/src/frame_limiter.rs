//! Frame pacing
//!
//! Bounds the rate of the polling loop: `start_frame` stamps the loop
//! iteration, `end_frame` blocks for whatever is left of the frame period.
//! The remainder is covered by a coarse sleep for all but the last few
//! milliseconds, then a spin-wait, trading a little CPU for sub-millisecond
//! accuracy (host sleeps routinely overshoot by a scheduler quantum).
//!
//! Not thread-safe; one instance is meant to be driven by a single loop
//! thread.

use std::time::{Duration, Instant};

/// Target rates at or above this are treated as "unlimited" and `end_frame`
/// becomes a no-op.
const UNLIMITED_THRESHOLD: u32 = 100_000;

/// Portion of the remainder covered by spin-waiting instead of sleeping.
const SPIN_WINDOW: Duration = Duration::from_millis(3);

/// Paces a polling loop to a target frame rate.
pub struct FrameLimiter {
    target_fps: u32,
    frame_time: Duration,
    last_frame: Instant,
}

impl FrameLimiter {
    /// Create a limiter for the given target rate. A target of 0 is clamped
    /// to 1 fps.
    pub fn new(target_fps: u32) -> Self {
        #[cfg(target_os = "windows")]
        high_res::acquire();

        let target_fps = target_fps.max(1);
        Self {
            target_fps,
            frame_time: frame_time_for(target_fps),
            last_frame: Instant::now(),
        }
    }

    /// Record the start of a frame.
    pub fn start_frame(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Block until the frame period since the last `start_frame` has
    /// elapsed. Returns immediately if it already has, or if the target rate
    /// is unlimited. The block is never longer than one frame period.
    pub fn end_frame(&self) {
        if self.target_fps >= UNLIMITED_THRESHOLD {
            return;
        }
        let deadline = self.last_frame + self.frame_time;
        let now = Instant::now();
        if now >= deadline {
            return;
        }

        let remaining = deadline - now;
        if remaining > SPIN_WINDOW {
            std::thread::sleep(remaining - SPIN_WINDOW);
        }
        while Instant::now() < deadline {
            std::hint::spin_loop();
        }
    }

    /// Change the target rate. Recomputes the frame period immediately; a
    /// frame already in progress is unaffected until its `end_frame`.
    pub fn set_target_fps(&mut self, target_fps: u32) {
        self.target_fps = target_fps.max(1);
        self.frame_time = frame_time_for(self.target_fps);
    }

    /// The configured target rate.
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// The configured frame period.
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }
}

impl Drop for FrameLimiter {
    fn drop(&mut self) {
        #[cfg(target_os = "windows")]
        high_res::release();
    }
}

fn frame_time_for(target_fps: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(target_fps))
}

/// Process-wide 1 ms timer resolution, reference-counted across limiter
/// instances: the first acquires it, the last drop releases it.
#[cfg(target_os = "windows")]
mod high_res {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use winapi::um::timeapi::{timeBeginPeriod, timeEndPeriod};

    static INSTANCES: AtomicUsize = AtomicUsize::new(0);

    pub fn acquire() {
        if INSTANCES.fetch_add(1, Ordering::SeqCst) == 0 {
            unsafe {
                timeBeginPeriod(1);
            }
        }
    }

    pub fn release() {
        if INSTANCES.fetch_sub(1, Ordering::SeqCst) == 1 {
            unsafe {
                timeEndPeriod(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_back_frame_blocks_for_period() {
        let mut limiter = FrameLimiter::new(60);
        limiter.start_frame();
        let begin = Instant::now();
        limiter.end_frame();
        let elapsed = begin.elapsed();

        // Roughly one 60 fps period; generous upper bound for loaded CI.
        assert!(elapsed >= Duration::from_millis(15), "blocked {elapsed:?}");
        assert!(elapsed < Duration::from_millis(33), "blocked {elapsed:?}");
    }

    #[test]
    fn test_unlimited_rate_returns_immediately() {
        let mut limiter = FrameLimiter::new(100_000);
        limiter.start_frame();
        let begin = Instant::now();
        limiter.end_frame();
        assert!(begin.elapsed() < Duration::from_millis(5));
    }

    #[test]
    fn test_overrun_frame_never_blocks() {
        let mut limiter = FrameLimiter::new(30);
        limiter.start_frame();
        std::thread::sleep(limiter.frame_time());
        let begin = Instant::now();
        limiter.end_frame();
        assert!(begin.elapsed() < Duration::from_millis(5));
    }

    #[test]
    fn test_set_target_fps_recomputes_period() {
        let mut limiter = FrameLimiter::new(60);
        assert_eq!(limiter.frame_time(), Duration::from_micros(16_666));
        limiter.set_target_fps(120);
        assert_eq!(limiter.target_fps(), 120);
        assert_eq!(limiter.frame_time(), Duration::from_micros(8_333));
    }

    #[test]
    fn test_zero_target_clamped() {
        let limiter = FrameLimiter::new(0);
        assert_eq!(limiter.target_fps(), 1);
    }
}
