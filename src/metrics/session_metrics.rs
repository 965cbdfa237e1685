use std::time::{Duration, Instant};

/// Wall-clock and frame counters shown in the HUD
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub frames_rendered: u64,
    pub restarts: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            frames_rendered: 0,
            restarts: 0,
        }
    }

    /// Call once per drawn frame
    pub fn on_frame(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
        self.frames_rendered += 1;
    }

    pub fn on_restart(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.frames_rendered = 0;
        self.restarts += 1;
    }

    /// Average frames per second since the last (re)start
    pub fn frame_rate(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs <= 0.0 {
            0.0
        } else {
            self.frames_rendered as f64 / secs
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
