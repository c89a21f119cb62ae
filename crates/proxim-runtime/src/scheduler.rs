//! Tick gate
//!
//! Converts the host's native tick signal (~64 Hz) into a bounded-frequency
//! evaluation trigger. Owns nothing but the counter.

/// Rate-limiting gate over the host tick signal
#[derive(Debug)]
pub struct TickGate {
    ticks_per_update: u32,
    counter: u32,
}

impl TickGate {
    /// Gate that opens every `ticks_per_update` ticks (minimum 1)
    pub fn new(ticks_per_update: u32) -> Self {
        TickGate {
            ticks_per_update: ticks_per_update.max(1),
            counter: 0,
        }
    }

    /// Count one host tick; true when an evaluation window opens
    pub fn fire(&mut self) -> bool {
        self.counter += 1;
        if self.counter < self.ticks_per_update {
            return false;
        }
        self.counter = 0;
        true
    }

    /// Rewind to the start of a window
    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_fires_every_nth_tick() {
        let mut gate = TickGate::new(3);

        assert!(!gate.fire());
        assert!(!gate.fire());
        assert!(gate.fire());
        assert!(!gate.fire());
        assert!(!gate.fire());
        assert!(gate.fire());
    }

    #[test]
    fn test_gate_of_one_fires_every_tick() {
        let mut gate = TickGate::new(1);

        assert!(gate.fire());
        assert!(gate.fire());
    }

    #[test]
    fn test_zero_clamps_to_one() {
        let mut gate = TickGate::new(0);

        assert!(gate.fire());
    }

    #[test]
    fn test_reset_rewinds_window() {
        let mut gate = TickGate::new(3);

        gate.fire();
        gate.fire();
        gate.reset();

        assert!(!gate.fire());
        assert!(!gate.fire());
        assert!(gate.fire());
    }
}
