//! Shared utilities

use std::collections::VecDeque;
use std::time::Instant;

// ============================================================================
// FPS Counter
// ============================================================================

/// FPS counter with rolling average
pub struct FpsCounter {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
    frames: u64,
}

impl FpsCounter {
    /// Create a new FPS counter with specified sample window
    pub fn new(sample_count: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count: sample_count.max(1),
            frames: 0,
        }
    }

    /// Call once per frame. Returns the rolling average FPS.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.push(dt)
    }

    fn push(&mut self, dt: f32) -> f32 {
        self.frames += 1;
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }
        self.avg_fps()
    }

    pub fn avg_fps(&self) -> f32 {
        let avg_dt = self.avg_frame_time();
        if avg_dt > 0.0 {
            1.0 / avg_dt
        } else {
            0.0
        }
    }

    /// Average frame time in milliseconds
    pub fn avg_frame_time_ms(&self) -> f32 {
        self.avg_frame_time() * 1000.0
    }

    /// True once per full sample window, for periodic reporting
    pub fn window_complete(&self) -> bool {
        self.frames % self.sample_count as u64 == 0
    }

    fn avg_frame_time(&self) -> f32 {
        self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32
    }
}
