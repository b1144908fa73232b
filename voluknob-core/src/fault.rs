//! Hardware fault reporting
//!
//! The control loop never stops on a hardware error. Each failed call is
//! mapped to a [`HardwareFault`], logged, counted and the loop moves on.

/// Which hardware boundary failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareFault {
    /// Panel flush failed (bus error, panel not responding)
    Display,
    /// Consumer control report could not be sent (host gone, endpoint busy)
    Hid,
    /// Button level could not be read
    Button,
}

/// Running tally of faults seen by the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultLog {
    count: u32,
    last: Option<HardwareFault>,
}

impl FaultLog {
    /// Empty log
    pub const fn new() -> Self {
        Self {
            count: 0,
            last: None,
        }
    }

    /// Record a fault
    pub fn record(&mut self, fault: HardwareFault) {
        self.count = self.count.wrapping_add(1);
        self.last = Some(fault);
    }

    /// Total faults since boot
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Most recent fault
    pub fn last(&self) -> Option<HardwareFault> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_and_remembers_last() {
        let mut log = FaultLog::new();
        assert_eq!(log.count(), 0);
        assert_eq!(log.last(), None);

        log.record(HardwareFault::Display);
        log.record(HardwareFault::Hid);

        assert_eq!(log.count(), 2);
        assert_eq!(log.last(), Some(HardwareFault::Hid));
    }
}
