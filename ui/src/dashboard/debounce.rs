//! Generation bookkeeping for the debounced resize re-render.
//!
//! Every raw resize event schedules a render and invalidates the previous
//! schedule. A scheduled render only fires if its generation is still the
//! latest when the quiet window elapses.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new trigger and returns its generation token. Any token
    /// issued earlier is now stale.
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// True if the token is still the newest schedule.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_schedule_survives() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule();
        let second = debouncer.schedule();
        let third = debouncer.schedule();

        assert!(!debouncer.is_current(first));
        assert!(!debouncer.is_current(second));
        assert!(debouncer.is_current(third));
    }

    #[test]
    fn settled_token_stays_valid_until_next_trigger() {
        let mut debouncer = Debouncer::new();
        let token = debouncer.schedule();
        assert!(debouncer.is_current(token));

        debouncer.schedule();
        assert!(!debouncer.is_current(token));
    }
}
