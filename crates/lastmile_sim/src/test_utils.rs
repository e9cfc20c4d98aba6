use jiff::civil::time;

use crate::{
    parsers::tables::parse_package_table,
    problem::{
        address_index::AddressIndex,
        distance_matrix::DistanceMatrix,
        package::{Package, PackageBuilder},
        package_store::PackageStore,
        truck::{Truck, TruckId},
    },
};

/// Streets for locations 1..=4; location 0 is the hub and locations 5 and 6
/// are package 9's placeholder and corrected addresses.
const STREETS: [&str; 4] = [
    "195 W Oakland Ave",
    "2530 S 500 E",
    "233 Canyon Rd",
    "380 W 2880 S",
];

pub fn lookup_tables() -> (AddressIndex, DistanceMatrix) {
    let addresses = AddressIndex::new(vec![
        String::from("4001 South 700 East, Salt Lake City, UT 84107"),
        String::from("195 W Oakland Ave, Salt Lake City, UT 84115"),
        String::from("2530 S 500 E, Salt Lake City, UT 84106"),
        String::from("233 Canyon Rd, Salt Lake City, UT 84103"),
        String::from("380 W 2880 S, Salt Lake City, UT 84115"),
        String::from("300 State St, Salt Lake City, UT, 84103"),
        String::from("410 S. State St., Salt Lake City, UT 84111"),
    ]);

    // Lower triangle only; the matrix mirrors blanks through the transpose.
    let distances = DistanceMatrix::new(vec![
        vec![Some(0.0)],
        vec![Some(2.0), Some(0.0)],
        vec![Some(3.6), Some(1.1), Some(0.0)],
        vec![Some(4.4), Some(5.2), Some(2.9), Some(0.0)],
        vec![Some(2.4), Some(3.5), Some(4.1), Some(6.0), Some(0.0)],
        vec![Some(2.2), Some(3.3), Some(1.5), Some(2.7), Some(3.9), Some(0.0)],
        vec![
            Some(4.6),
            Some(1.7),
            Some(2.8),
            Some(3.1),
            Some(2.6),
            Some(1.9),
            Some(0.0),
        ],
    ]);

    (addresses, distances)
}

fn package_csv(ids: impl IntoIterator<Item = u32>) -> String {
    ids.into_iter()
        .map(|id| {
            let street = STREETS[(id as usize - 1) % STREETS.len()];
            let deadline = if id % 3 == 0 { "10:30 AM" } else { "EOD" };
            format!("{id},{street},Salt Lake City,UT,84115,{deadline},{id}\n")
        })
        .collect()
}

/// A full day's workload: ids 1..=40 spread over the fixture streets, run
/// through the production package-table parser so the delayed-arrival and
/// package-9 special cases apply exactly as they do for real input.
pub fn forty_package_store() -> PackageStore {
    parse_package_table(&package_csv(1..=40))
}

pub fn store_with_ids(ids: impl IntoIterator<Item = u32>) -> PackageStore {
    parse_package_table(&package_csv(ids))
}

pub fn package(id: u32, address: &str) -> Package {
    let mut builder = PackageBuilder::default();
    builder.set_id(id);
    builder.set_address(String::from(address));
    builder.build()
}

pub fn fleet() -> [Truck; 3] {
    [
        Truck::new(TruckId::new(1), time(8, 0, 0, 0)),
        Truck::new(TruckId::new(2), time(8, 0, 0, 0)),
        Truck::new(TruckId::new(3), time(9, 5, 0, 0)),
    ]
}
