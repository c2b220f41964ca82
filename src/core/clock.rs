use std::time::Instant;

/// Wall clock - tracks delta time between frames
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns variable frame deltas into a whole number of fixed camera steps.
///
/// At most `max_steps` are produced per tick; any backlog beyond that is
/// dropped so a long stall cannot snowball into ever longer frames.
#[derive(Debug, Clone)]
pub struct FixedStep {
    timestep: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedStep {
    pub fn new(hz: f32, max_steps: u32) -> Self {
        debug_assert!(hz > 0.0, "step rate must be positive, got {hz}");
        Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        }
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Add `delta` seconds, returns how many fixed steps to run now
    pub fn tick(&mut self, delta: f32) -> u32 {
        self.accumulator += delta.max(0.0);

        let due = (self.accumulator / self.timestep).floor() as u32;
        let steps = due.min(self.max_steps);
        self.accumulator -= steps as f32 * self.timestep;

        if due > steps {
            log::debug!(
                "Dropping {} camera steps after a {:.3}s frame",
                due - steps,
                delta
            );
            self.accumulator %= self.timestep;
        }

        steps
    }

    /// Fraction of a step left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.timestep
    }
}
