/// Frame pacing, statistics and loop cancellation
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// What to do after a frame's work is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Frame finished early; wait out the rest of the interval
    Sleep(Duration),
    /// Frame used its whole budget (or more); start the next one at once
    Overrun(Duration),
}

/// Fixed-interval pacer. There is no catch-up: a late frame only delays the next one.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    target: Duration,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    pub fn plan(&self, elapsed: Duration) -> Pacing {
        match self.target.checked_sub(elapsed) {
            Some(remaining) if !remaining.is_zero() => Pacing::Sleep(remaining),
            _ => Pacing::Overrun(elapsed - self.target),
        }
    }
}

/// Counters accumulated over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub overruns: u64,
    pub slept: Duration,
}

impl FrameStats {
    pub fn record(&mut self, pacing: Pacing) {
        self.frames += 1;
        match pacing {
            Pacing::Sleep(duration) => self.slept += duration,
            Pacing::Overrun(_) => self.overruns += 1,
        }
    }
}

/// Measures the achieved frame rate over one-second windows
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    window_start: Instant,
    frame_count: u32,
    fps: f32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Count a frame; returns the new rate whenever a window closes
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frame_count += 1;
        let window = now.saturating_duration_since(self.window_start);
        if window.as_secs() >= 1 {
            self.fps = self.frame_count as f32 / window.as_secs_f32();
            self.frame_count = 0;
            self.window_start = now;
            Some(self.fps)
        } else {
            None
        }
    }
}

/// Shared flag checked by the animation loop before every frame
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_frame_sleeps_for_remainder() {
        let pacer = FramePacer::new(Duration::from_millis(16));
        assert_eq!(
            pacer.plan(Duration::from_millis(5)),
            Pacing::Sleep(Duration::from_millis(11))
        );
        assert_eq!(
            pacer.plan(Duration::ZERO),
            Pacing::Sleep(Duration::from_millis(16))
        );
    }

    #[test]
    fn test_long_frame_overruns_without_sleep() {
        let pacer = FramePacer::new(Duration::from_millis(16));
        assert_eq!(
            pacer.plan(Duration::from_millis(20)),
            Pacing::Overrun(Duration::from_millis(4))
        );
        // A frame that uses exactly the budget leaves nothing to sleep.
        assert_eq!(
            pacer.plan(Duration::from_millis(16)),
            Pacing::Overrun(Duration::ZERO)
        );
    }

    #[test]
    fn test_stats_record() {
        let mut stats = FrameStats::default();
        stats.record(Pacing::Sleep(Duration::from_millis(3)));
        stats.record(Pacing::Overrun(Duration::from_millis(1)));
        stats.record(Pacing::Sleep(Duration::from_millis(2)));
        assert_eq!(
            stats,
            FrameStats {
                frames: 3,
                overruns: 1,
                slept: Duration::from_millis(5),
            }
        );
    }

    #[test]
    fn test_fps_counter_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        for i in 1..30 {
            assert_eq!(counter.tick(start + Duration::from_millis(i * 20)), None);
        }
        let fps = counter.tick(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 30.0).abs() < 1e-3);
        assert!((counter.fps() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn test_stop_token_is_shared() {
        let token = StopToken::new();
        let handle = token.clone();
        assert!(!token.is_stopped());
        handle.stop();
        assert!(token.is_stopped());
    }
}
