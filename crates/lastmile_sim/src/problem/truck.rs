use jiff::{SignedDuration, civil::Time};
use serde::Serialize;
use smallvec::SmallVec;

use crate::{
    constants::{HUB_ADDRESS, TRUCK_CAPACITY, TRUCK_SPEED_MPH},
    problem::package::PackageId,
};

/// External truck number, 1-based as painted on the truck.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TruckId(u8);

impl TruckId {
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub const fn get(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TruckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Truck {
    id: TruckId,
    capacity: usize,
    speed: f64,
    manifest: SmallVec<[PackageId; TRUCK_CAPACITY]>,
    mileage: f64,
    address: String,
    depart_time: Time,
    clock: Time,
}

impl Truck {
    pub fn new(id: TruckId, depart_time: Time) -> Self {
        Self {
            id,
            capacity: TRUCK_CAPACITY,
            speed: TRUCK_SPEED_MPH,
            manifest: SmallVec::new(),
            mileage: 0.0,
            address: String::from(HUB_ADDRESS),
            depart_time,
            clock: depart_time,
        }
    }

    pub fn id(&self) -> TruckId {
        self.id
    }

    pub fn is_full(&self) -> bool {
        self.manifest.len() >= self.capacity
    }

    pub fn manifest(&self) -> &[PackageId] {
        &self.manifest
    }

    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn depart_time(&self) -> Time {
        self.depart_time
    }

    pub fn clock(&self) -> Time {
        self.clock
    }

    pub fn load(&mut self, package: PackageId) {
        self.manifest.push(package);
    }

    pub fn unload(&mut self, package: PackageId) {
        if let Some(pos) = self.manifest.iter().position(|&id| id == package) {
            self.manifest.remove(pos);
        }
    }

    /// Pushes the scheduled departure forward (waiting for a driver). The
    /// clock follows: nothing has been driven yet.
    pub fn delay_departure_until(&mut self, at: Time) {
        debug_assert!(at >= self.depart_time);
        self.depart_time = at;
        self.clock = at;
    }

    /// Drives `distance` miles: mileage accrues and the clock advances by
    /// `distance / speed` hours. Returns the arrival time.
    pub fn drive(&mut self, distance: f64) -> Time {
        self.mileage += distance;
        let hours = distance / self.speed;
        self.clock = self
            .clock
            .saturating_add(SignedDuration::from_secs_f64(hours * 3600.0));
        self.clock
    }

    pub fn park_at(&mut self, address: String) {
        self.address = address;
    }
}
