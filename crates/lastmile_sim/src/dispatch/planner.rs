use tracing::warn;

use crate::{
    constants::{DELAYED_ARRIVAL, DELAYED_PACKAGE_IDS, TOGETHER_GROUPS, TRUCK2_ONLY_IDS},
    problem::{
        package::PackageId,
        package_store::PackageStore,
        truck::Truck,
    },
};

/// Partitions the loaded packages across the three trucks by applying the
/// constraint rules in priority order. Every stored id ends up on exactly
/// one truck; an id named by a rule but absent from the store is logged
/// and skipped.
pub struct AssignmentPlanner;

impl AssignmentPlanner {
    pub fn assign(store: &mut PackageStore, trucks: &mut [Truck; 3]) {
        // Rule 1: hard pins to truck 2.
        for id in TRUCK2_ONLY_IDS.map(PackageId::new) {
            Self::place(store, &mut trucks[1], id);
        }

        // Rule 2: delayed arrivals go on truck 3, which cannot leave before
        // they reach the hub.
        for id in DELAYED_PACKAGE_IDS.map(PackageId::new) {
            Self::place(store, &mut trucks[2], id);
        }
        if trucks[2].depart_time() < DELAYED_ARRIVAL {
            trucks[2].delay_departure_until(DELAYED_ARRIVAL);
        }

        // Rule 3: the union of the must-travel-together groups rides on
        // truck 1. Groups overlap, so membership is checked per id rather
        // than appended blindly.
        for group in TOGETHER_GROUPS {
            for id in group.map(PackageId::new) {
                Self::place(store, &mut trucks[0], id);
            }
        }

        // Rule 4: fill truck 1 to capacity with whatever is left, then
        // overflow to truck 2.
        for id in store.sorted_ids() {
            let already_assigned = store
                .search(id)
                .is_some_and(|package| package.truck().is_some());
            if already_assigned {
                continue;
            }

            let truck = if trucks[0].is_full() { 1 } else { 0 };
            Self::place(store, &mut trucks[truck], id);
        }
    }

    fn place(store: &mut PackageStore, truck: &mut Truck, id: PackageId) {
        match store.search_mut(id) {
            Some(package) => {
                if package.truck().is_some() {
                    return;
                }
                package.assign_to(truck.id());
                truck.load(id);
            }
            None => warn!("package {id} named by an assignment rule is not in the store"),
        }
    }
}
