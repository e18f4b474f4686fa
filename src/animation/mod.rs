//! Host-clocked animation primitives.
//!
//! Nothing here reads a wall clock. The host feeds elapsed time into
//! [`Timeline::advance`] from whatever frame source it has, which keeps
//! animations deterministic and testable.

mod animatable;
mod timing;

use std::time::Duration;

pub use animatable::Animatable;
pub use timing::TimingFunction;

/// Configuration for how a value should animate from 0 to 1
#[derive(Clone, Debug)]
pub struct Transition {
    /// Length of the animation
    pub duration: Duration,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }
}

/// Lifecycle of a [`Timeline`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Created but not started yet
    Pending,
    /// Advancing with host time
    Running,
    /// Reached the end of its duration
    Finished,
    /// Stopped before finishing; terminal
    Cancelled,
}

/// A single 0 → 1 progress animation driven by host time.
#[derive(Debug, Clone)]
pub struct Timeline {
    transition: Transition,
    elapsed: Duration,
    status: AnimationStatus,
}

impl Timeline {
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            elapsed: Duration::ZERO,
            status: AnimationStatus::Pending,
        }
    }

    /// Begin running. Only a pending timeline can start.
    pub fn start(&mut self) -> bool {
        if self.status != AnimationStatus::Pending {
            return false;
        }
        self.status = AnimationStatus::Running;
        true
    }

    /// Stop the timeline for good. Returns false if it had already ended.
    pub fn cancel(&mut self) -> bool {
        match self.status {
            AnimationStatus::Pending | AnimationStatus::Running => {
                self.status = AnimationStatus::Cancelled;
                true
            }
            AnimationStatus::Finished | AnimationStatus::Cancelled => false,
        }
    }

    /// Advance by `dt`. Returns true only on the tick that completes the
    /// animation.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.status != AnimationStatus::Running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.transition.duration {
            self.elapsed = self.transition.duration;
            self.status = AnimationStatus::Finished;
            return true;
        }
        false
    }

    /// Linear time fraction in `[0, 1]`
    pub fn raw_progress(&self) -> f32 {
        if self.status == AnimationStatus::Finished {
            return 1.0;
        }
        let total = self.transition.duration.as_secs_f32();
        if total <= 0.0 {
            return 0.0;
        }
        (self.elapsed.as_secs_f32() / total).min(1.0)
    }

    /// Eased progress value
    pub fn progress(&self) -> f32 {
        match self.status {
            AnimationStatus::Finished => 1.0,
            _ => self.transition.timing.evaluate(self.raw_progress()),
        }
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == AnimationStatus::Running
    }

    pub fn duration(&self) -> Duration {
        self.transition.duration
    }
}
