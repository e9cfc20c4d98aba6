use jiff::civil::Time;
use serde::Serialize;

use crate::problem::{
    package::{Deadline, PackageId, PackageStatus},
    package_store::PackageStore,
    truck::TruckId,
};

/// One package's reconstructed state at a query time.
#[derive(Serialize, Debug, Clone)]
pub struct PackageSnapshot {
    pub at: Time,
    pub id: PackageId,
    pub address: String,
    pub deadline: Deadline,
    pub truck: Option<TruckId>,
    pub delivery_time: Option<Time>,
    pub status: PackageStatus,
}

/// Reconstructs package state at arbitrary points in time from the facts
/// the simulation recorded. Queries are pure: nothing in the store is
/// touched, so asking twice (or out of order) gives identical answers.
pub struct StatusOracle;

impl StatusOracle {
    /// Snapshots every known package at `at`, in ascending id order.
    pub fn snapshot_at(store: &PackageStore, at: Time) -> Vec<PackageSnapshot> {
        store
            .sorted_ids()
            .into_iter()
            .filter_map(|id| store.search(id))
            .map(|package| PackageSnapshot {
                at,
                id: package.id(),
                address: package.address_at(at).to_owned(),
                deadline: package.deadline(),
                truck: package.truck(),
                delivery_time: package.delivery_time(),
                status: package.status_at(at),
            })
            .collect()
    }

    /// Batch variant for the fixed reporting schedule.
    pub fn capture(store: &PackageStore, times: &[Time]) -> Vec<(Time, Vec<PackageSnapshot>)> {
        times
            .iter()
            .map(|&at| (at, Self::snapshot_at(store, at)))
            .collect()
    }
}
