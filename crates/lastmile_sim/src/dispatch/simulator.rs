use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::{
    dispatch::driver_roster::DriverRoster,
    problem::{
        address_index::AddressIndex,
        distance_matrix::{Distance, DistanceMatrix},
        package::PackageId,
        package_store::PackageStore,
        truck::Truck,
    },
};

/// Greedy nearest-neighbor route simulation. Holds the static lookup tables
/// by reference; all mutation happens through the truck, the store, and the
/// driver roster passed into [`RouteSimulator::deliver`].
pub struct RouteSimulator<'a> {
    addresses: &'a AddressIndex,
    distances: &'a DistanceMatrix,
}

impl<'a> RouteSimulator<'a> {
    pub fn new(addresses: &'a AddressIndex, distances: &'a DistanceMatrix) -> Self {
        Self {
            addresses,
            distances,
        }
    }

    /// Runs one truck's full route. Claims the earliest-free driver (pushing
    /// the departure forward if none is free yet), then repeatedly delivers
    /// the nearest undelivered package until the manifest is empty, and
    /// finally releases the driver at the truck's return clock.
    pub fn deliver(&self, truck: &mut Truck, store: &mut PackageStore, drivers: &mut DriverRoster) {
        let (driver, depart) = drivers.claim(truck.depart_time());
        if depart > truck.depart_time() {
            debug!(
                "truck {} held until {} for a driver",
                truck.id(),
                depart.strftime("%H:%M")
            );
            truck.delay_departure_until(depart);
        }

        // The whole load leaves the hub together.
        for &id in truck.manifest() {
            if let Some(package) = store.search_mut(id) {
                package.record_departure(depart);
            }
        }

        while !truck.manifest().is_empty() {
            let Some(current) = self.addresses.resolve(truck.address()) else {
                warn!(
                    "truck {} is at unmapped address '{}'; abandoning route",
                    truck.id(),
                    truck.address()
                );
                break;
            };

            let mut nearest: Option<(PackageId, Distance)> = None;
            let mut dead_letters: SmallVec<[PackageId; 4]> = SmallVec::new();

            for &id in truck.manifest() {
                let Some(package) = store.search(id) else {
                    warn!("package {id} vanished from the store; dropping from route");
                    dead_letters.push(id);
                    continue;
                };

                let destination = package.address_at(truck.clock());
                let Some(location) = self.addresses.resolve(destination) else {
                    warn!("address '{destination}' not found; dropping package {id} from route");
                    dead_letters.push(id);
                    continue;
                };

                match self.distances.distance(current, location) {
                    // Strict minimum: the first-seen package wins exact ties.
                    Some(distance) if nearest.is_none_or(|(_, best)| distance < best) => {
                        nearest = Some((id, distance));
                    }
                    Some(_) => {}
                    None => {
                        warn!("no distance from {current} to {location}; dropping package {id}");
                        dead_letters.push(id);
                    }
                }
            }

            for id in dead_letters {
                truck.unload(id);
            }

            let Some((next_id, distance)) = nearest else {
                continue;
            };

            // The destination was chosen at scan time; resolve it before the
            // clock moves so a leg crossing the address-correction cutover
            // parks the truck where it actually drove.
            let destination = store
                .search(next_id)
                .map(|package| package.address_at(truck.clock()).to_owned());

            let arrival = truck.drive(distance);
            if let Some(package) = store.search_mut(next_id) {
                package.record_delivery(arrival);
            }
            if let Some(destination) = destination {
                debug!(
                    "truck {} delivered package {} to '{}' at {} ({:.1} mi leg)",
                    truck.id(),
                    next_id,
                    destination,
                    arrival.strftime("%H:%M:%S"),
                    distance
                );
                truck.park_at(destination);
            }
            truck.unload(next_id);
        }

        drivers.release(driver, truck.clock());
    }
}
