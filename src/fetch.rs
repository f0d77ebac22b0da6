//! Mock data loading with artificial latency.
//!
//! Every list a screen shows is served from the static tables, but arrives
//! through a [`Remote`] cell that resolves a fixed number of ticks after the
//! request, so loading states are real and observable. Each request bumps a
//! generation counter; a resolution whose generation is no longer current is
//! dropped instead of overwriting newer state, so rapid re-requests (tab
//! switches, day changes) can never be clobbered by a slow stale load.

struct Pending<T> {
    value: T,
    ticks_left: u32,
    generation: u32,
}

/// A value that arrives later. `request` starts a load, `tick` advances it,
/// `get` yields the settled value.
pub struct Remote<T> {
    value: Option<T>,
    in_flight: Vec<Pending<T>>,
    generation: u32,
}

impl<T> Remote<T> {
    /// No value, nothing loading.
    pub fn idle() -> Self {
        Self {
            value: None,
            in_flight: Vec::new(),
            generation: 0,
        }
    }

    /// Start a load that settles after `latency` ticks. Supersedes any load
    /// still in flight: older requests keep ticking but their results are
    /// discarded on arrival. `latency == 0` settles immediately.
    pub fn request(&mut self, latency: u32, value: T) {
        self.generation += 1;
        if latency == 0 {
            self.value = Some(value);
            return;
        }
        self.in_flight.push(Pending {
            value,
            ticks_left: latency,
            generation: self.generation,
        });
    }

    /// Advance all in-flight loads by `ticks`. A load that settles applies
    /// only when it is still the current generation.
    pub fn tick(&mut self, ticks: u32) {
        if ticks == 0 || self.in_flight.is_empty() {
            return;
        }
        let current = self.generation;
        let drained = std::mem::take(&mut self.in_flight);
        let mut remaining = Vec::with_capacity(drained.len());
        for mut p in drained {
            p.ticks_left = p.ticks_left.saturating_sub(ticks);
            if p.ticks_left == 0 {
                if p.generation == current {
                    self.value = Some(p.value);
                }
                // Stale generation: dropped on the floor.
            } else {
                remaining.push(p);
            }
        }
        self.in_flight = remaining;
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// True while the latest request has not settled yet.
    pub fn is_loading(&self) -> bool {
        self.in_flight
            .iter()
            .any(|p| p.generation == self.generation)
    }
}
