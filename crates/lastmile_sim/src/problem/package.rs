use jiff::civil::Time;
use serde::Serialize;

use crate::problem::truck::TruckId;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(u32);

impl PackageId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PackageId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    EndOfDay,
    At(Time),
}

impl Deadline {
    /// Parses `"EOD"`, `"10:30 AM"`, or `"10:30"`.
    pub fn parse(input: &str) -> Option<Deadline> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("EOD") {
            return Some(Deadline::EndOfDay);
        }

        Time::strptime("%I:%M %p", input)
            .or_else(|_| Time::strptime("%H:%M", input))
            .map(Deadline::At)
            .ok()
    }
}

impl std::fmt::Display for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Deadline::EndOfDay => write!(f, "EOD"),
            Deadline::At(time) => write!(f, "{}", time.strftime("%H:%M")),
        }
    }
}

/// Derived package state at a given query time. Never stored; always
/// recomputed from the package's recorded facts, so queries are idempotent.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageStatus {
    Delayed,
    AtHub,
    EnRoute(Time),
    Delivered(Time),
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageStatus::Delayed => write!(f, "Delayed"),
            PackageStatus::AtHub => write!(f, "At Hub"),
            PackageStatus::EnRoute(since) => {
                write!(f, "En route since {}", since.strftime("%H:%M"))
            }
            PackageStatus::Delivered(at) => write!(f, "Delivered at {}", at.strftime("%H:%M:%S")),
        }
    }
}

/// A pending address fix: the package's real destination, known to dispatch
/// but only effective once the correction comes through.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressCorrection {
    pub address: String,
    pub effective: Time,
}

#[derive(Serialize, Debug, Clone)]
pub struct Package {
    id: PackageId,
    address: String,
    city: String,
    state: String,
    zipcode: String,
    deadline: Deadline,
    weight: f64,
    truck: Option<TruckId>,
    departure_time: Option<Time>,
    delivery_time: Option<Time>,
    available_from: Time,
    correction: Option<AddressCorrection>,
}

impl Package {
    pub fn id(&self) -> PackageId {
        self.id
    }

    /// The address as loaded, before any pending correction applies.
    pub fn base_address(&self) -> &str {
        &self.address
    }

    /// The destination as known at `at`: the corrected address once the
    /// correction's effective time has passed, the loaded address before.
    pub fn address_at(&self, at: Time) -> &str {
        match &self.correction {
            Some(correction) if at >= correction.effective => &correction.address,
            _ => &self.address,
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn deadline(&self) -> Deadline {
        self.deadline
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn truck(&self) -> Option<TruckId> {
        self.truck
    }

    pub fn departure_time(&self) -> Option<Time> {
        self.departure_time
    }

    pub fn delivery_time(&self) -> Option<Time> {
        self.delivery_time
    }

    pub fn available_from(&self) -> Time {
        self.available_from
    }

    /// Assigns the package to a truck. Assignment happens exactly once,
    /// before routing.
    pub fn assign_to(&mut self, truck: TruckId) {
        debug_assert!(self.truck.is_none(), "package {} reassigned", self.id);
        self.truck = Some(truck);
    }

    pub fn record_departure(&mut self, at: Time) {
        self.departure_time = Some(at);
    }

    /// Records the delivery timestamp. Set once by the simulator, never reset.
    pub fn record_delivery(&mut self, at: Time) {
        debug_assert!(self.delivery_time.is_none(), "package {} redelivered", self.id);
        self.delivery_time = Some(at);
    }

    /// The status state machine, evaluated fresh at `at`.
    pub fn status_at(&self, at: Time) -> PackageStatus {
        if at < self.available_from {
            return PackageStatus::Delayed;
        }

        if let Some(delivered) = self.delivery_time
            && delivered <= at
        {
            return PackageStatus::Delivered(delivered);
        }

        if let Some(departed) = self.departure_time
            && departed <= at
        {
            return PackageStatus::EnRoute(departed);
        }

        PackageStatus::AtHub
    }
}

#[derive(Default)]
pub struct PackageBuilder {
    id: Option<PackageId>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zipcode: Option<String>,
    deadline: Option<Deadline>,
    weight: Option<f64>,
    available_from: Option<Time>,
    correction: Option<AddressCorrection>,
}

impl PackageBuilder {
    pub fn set_id(&mut self, id: u32) -> &mut PackageBuilder {
        self.id = Some(PackageId::new(id));
        self
    }

    pub fn set_address(&mut self, address: String) -> &mut PackageBuilder {
        self.address = Some(address);
        self
    }

    pub fn set_city(&mut self, city: String) -> &mut PackageBuilder {
        self.city = Some(city);
        self
    }

    pub fn set_state(&mut self, state: String) -> &mut PackageBuilder {
        self.state = Some(state);
        self
    }

    pub fn set_zipcode(&mut self, zipcode: String) -> &mut PackageBuilder {
        self.zipcode = Some(zipcode);
        self
    }

    pub fn set_deadline(&mut self, deadline: Deadline) -> &mut PackageBuilder {
        self.deadline = Some(deadline);
        self
    }

    pub fn set_weight(&mut self, weight: f64) -> &mut PackageBuilder {
        self.weight = Some(weight);
        self
    }

    pub fn set_available_from(&mut self, available_from: Time) -> &mut PackageBuilder {
        self.available_from = Some(available_from);
        self
    }

    pub fn set_correction(&mut self, correction: AddressCorrection) -> &mut PackageBuilder {
        self.correction = Some(correction);
        self
    }

    pub fn build(self) -> Package {
        Package {
            id: self.id.expect("Package id is required"),
            address: self.address.expect("Package address is required"),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            zipcode: self.zipcode.unwrap_or_default(),
            deadline: self.deadline.unwrap_or(Deadline::EndOfDay),
            weight: self.weight.unwrap_or_default(),
            truck: None,
            departure_time: None,
            delivery_time: None,
            available_from: self.available_from.unwrap_or(Time::midnight()),
            correction: self.correction,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;

    use super::*;

    fn package_with_correction() -> Package {
        let mut builder = PackageBuilder::default();
        builder.set_id(9);
        builder.set_address(String::from("300 State St"));
        builder.set_correction(AddressCorrection {
            address: String::from("410 S. State St."),
            effective: time(10, 20, 0, 0),
        });
        builder.build()
    }

    #[test]
    fn address_before_correction_is_the_loaded_one() {
        let package = package_with_correction();
        assert_eq!(package.address_at(time(10, 0, 0, 0)), "300 State St");
    }

    #[test]
    fn address_at_and_after_cutover_is_corrected() {
        let package = package_with_correction();
        assert_eq!(package.address_at(time(10, 20, 0, 0)), "410 S. State St.");
        assert_eq!(package.address_at(time(16, 0, 0, 0)), "410 S. State St.");
    }

    #[test]
    fn address_query_does_not_mutate_the_package() {
        let package = package_with_correction();
        let _ = package.address_at(time(12, 0, 0, 0));
        assert_eq!(package.address_at(time(9, 0, 0, 0)), "300 State St");
        assert_eq!(package.base_address(), "300 State St");
    }

    #[test]
    fn status_is_delayed_before_availability() {
        let mut builder = PackageBuilder::default();
        builder.set_id(6);
        builder.set_address(String::from("3060 Lester St"));
        builder.set_available_from(time(9, 5, 0, 0));
        let package = builder.build();

        assert_eq!(package.status_at(time(9, 0, 0, 0)), PackageStatus::Delayed);
        assert_eq!(package.status_at(time(9, 5, 0, 0)), PackageStatus::AtHub);
    }

    #[test]
    fn status_walks_hub_enroute_delivered() {
        let mut builder = PackageBuilder::default();
        builder.set_id(1);
        builder.set_address(String::from("195 W Oakland Ave"));
        let mut package = builder.build();

        package.record_departure(time(8, 0, 0, 0));
        package.record_delivery(time(8, 40, 0, 0));

        assert_eq!(package.status_at(time(7, 30, 0, 0)), PackageStatus::AtHub);
        assert_eq!(
            package.status_at(time(8, 10, 0, 0)),
            PackageStatus::EnRoute(time(8, 0, 0, 0))
        );
        assert_eq!(
            package.status_at(time(8, 40, 0, 0)),
            PackageStatus::Delivered(time(8, 40, 0, 0))
        );
        assert_eq!(
            package.status_at(time(15, 0, 0, 0)),
            PackageStatus::Delivered(time(8, 40, 0, 0))
        );
    }

    #[test]
    fn deadline_parsing_accepts_eod_and_clock_forms() {
        assert_eq!(Deadline::parse("EOD"), Some(Deadline::EndOfDay));
        assert_eq!(Deadline::parse("10:30 AM"), Some(Deadline::At(time(10, 30, 0, 0))));
        assert_eq!(Deadline::parse("9:00 AM"), Some(Deadline::At(time(9, 0, 0, 0))));
        assert_eq!(Deadline::parse("13:00"), Some(Deadline::At(time(13, 0, 0, 0))));
        assert_eq!(Deadline::parse("whenever"), None);
    }
}
