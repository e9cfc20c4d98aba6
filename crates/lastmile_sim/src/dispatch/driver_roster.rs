use jiff::civil::Time;
use smallvec::SmallVec;

use crate::constants::NUM_DRIVERS;

/// Ledger of when each driver is next free. Claims are non-preemptive and
/// single-pass: a claimed slot holds the depart time until the route
/// finishes and `release` writes back the truck's final clock.
#[derive(Debug, Clone)]
pub struct DriverRoster {
    next_free: SmallVec<[Time; NUM_DRIVERS]>,
}

impl DriverRoster {
    pub fn new(drivers: usize, start: Time) -> Self {
        Self {
            next_free: (0..drivers.max(1)).map(|_| start).collect(),
        }
    }

    /// Claims the earliest-free driver for a route that wants to leave at
    /// `requested_depart`. Returns the driver's slot and the actual depart
    /// time, pushed forward if no driver is free that early.
    pub fn claim(&mut self, requested_depart: Time) -> (usize, Time) {
        let (slot, &earliest) = self
            .next_free
            .iter()
            .enumerate()
            .min_by_key(|&(_, &at)| at)
            .expect("roster has at least one driver");

        let depart = requested_depart.max(earliest);
        self.next_free[slot] = depart;
        (slot, depart)
    }

    pub fn release(&mut self, slot: usize, until: Time) {
        self.next_free[slot] = until;
    }

    pub fn earliest_free(&self) -> Time {
        self.next_free
            .iter()
            .copied()
            .min()
            .expect("roster has at least one driver")
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    #[test]
    fn claim_prefers_the_earliest_free_driver() {
        let mut roster = DriverRoster::new(2, time(8, 0, 0, 0));
        roster.release(0, time(11, 30, 0, 0));

        let (slot, depart) = roster.claim(time(9, 5, 0, 0));
        assert_eq!(slot, 1);
        assert_eq!(depart, time(9, 5, 0, 0));
    }

    #[test]
    fn departure_waits_for_a_driver() {
        let mut roster = DriverRoster::new(2, time(8, 0, 0, 0));
        roster.release(0, time(10, 45, 0, 0));
        roster.release(1, time(11, 15, 0, 0));

        let (slot, depart) = roster.claim(time(9, 5, 0, 0));
        assert_eq!(slot, 0);
        assert_eq!(depart, time(10, 45, 0, 0));
    }

    #[test]
    fn claim_scans_the_whole_roster_for_the_minimum() {
        let mut roster = DriverRoster::new(2, time(8, 0, 0, 0));
        roster.release(0, time(12, 10, 0, 0));
        roster.release(1, time(10, 45, 0, 0));

        let (slot, depart) = roster.claim(time(8, 0, 0, 0));
        assert_eq!(slot, 1);
        assert_eq!(depart, time(10, 45, 0, 0));
        assert_eq!(roster.earliest_free(), time(10, 45, 0, 0));
    }

    #[test]
    fn ties_take_the_first_slot() {
        let mut roster = DriverRoster::new(2, time(8, 0, 0, 0));
        let (slot, depart) = roster.claim(time(8, 0, 0, 0));
        assert_eq!(slot, 0);
        assert_eq!(depart, time(8, 0, 0, 0));
        assert_eq!(roster.earliest_free(), time(8, 0, 0, 0));
    }
}
