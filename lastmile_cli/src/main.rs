use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use jiff::civil::Time;
use lastmile_sim::{
    constants::{CAPTURE_TIMES, DELAYED_ARRIVAL, MORNING_DEPART, NUM_DRIVERS},
    dispatch::{
        driver_roster::DriverRoster, oracle::StatusOracle, planner::AssignmentPlanner,
        simulator::RouteSimulator,
    },
    parsers::tables,
    problem::{
        address_index::AddressIndex,
        distance_matrix::DistanceMatrix,
        package_store::PackageStore,
        truck::{Truck, TruckId},
    },
};
use tracing::{error, info};

mod parsers;
mod report;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Distance table CSV (row/column order matches the address table)
    #[arg(long, default_value = "data/distances.csv")]
    distances: PathBuf,

    /// Address table CSV
    #[arg(long, default_value = "data/addresses.csv")]
    addresses: PathBuf,

    /// Package table CSV
    #[arg(long, default_value = "data/packages.csv")]
    packages: PathBuf,

    /// Print the snapshot report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Query package status at a single time (HH:MM) instead of prompting
    #[arg(long, value_parser = parsers::parse_clock)]
    at: Option<Time>,

    /// Skip the interactive time prompt
    #[arg(long)]
    no_prompt: bool,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    // A missing table is reported and replaced by an empty one; downstream
    // lookups then miss gracefully instead of aborting the run.
    let distances = tables::load_distance_table(&cli.distances).unwrap_or_else(|err| {
        error!("could not load {:?}: {err}", cli.distances);
        DistanceMatrix::empty()
    });
    let addresses = tables::load_address_table(&cli.addresses).unwrap_or_else(|err| {
        error!("could not load {:?}: {err}", cli.addresses);
        AddressIndex::empty()
    });
    let mut store = tables::load_package_table(&cli.packages).unwrap_or_else(|err| {
        error!("could not load {:?}: {err}", cli.packages);
        PackageStore::new()
    });

    let mut trucks = [
        Truck::new(TruckId::new(1), MORNING_DEPART),
        Truck::new(TruckId::new(2), MORNING_DEPART),
        Truck::new(TruckId::new(3), DELAYED_ARRIVAL),
    ];

    AssignmentPlanner::assign(&mut store, &mut trucks);

    let simulator = RouteSimulator::new(&addresses, &distances);
    let mut drivers = DriverRoster::new(NUM_DRIVERS, MORNING_DEPART);
    for truck in trucks.iter_mut() {
        simulator.deliver(truck, &mut store, &mut drivers);
        info!(
            "truck {} back at {} with {:.1} miles on the clock",
            truck.id(),
            truck.clock().strftime("%H:%M:%S"),
            truck.mileage()
        );
    }

    let total_mileage: f64 = trucks.iter().map(Truck::mileage).sum();
    info!("Total mileage traveled by all trucks: {total_mileage:.1} miles");

    let captured = StatusOracle::capture(&store, &CAPTURE_TIMES);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&captured)?);
    } else {
        for (at, snapshots) in &captured {
            report::print_snapshot_table(*at, snapshots);
        }
    }

    if let Some(at) = cli.at {
        report::print_snapshot_table(at, &StatusOracle::snapshot_at(&store, at));
    } else if !cli.no_prompt {
        match prompt_for_time()? {
            Some(at) => report::print_snapshot_table(at, &StatusOracle::snapshot_at(&store, at)),
            None => error!("Invalid time format. Please use HH:MM."),
        }
    }

    Ok(())
}

fn prompt_for_time() -> Result<Option<Time>, anyhow::Error> {
    print!("Enter the time (HH:MM): ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;

    Ok(parsers::parse_clock(&input).ok())
}
