use comfy_table::Table;
use jiff::civil::Time;
use lastmile_sim::dispatch::oracle::PackageSnapshot;

pub fn print_snapshot_table(at: Time, snapshots: &[PackageSnapshot]) {
    let mut table = Table::new();
    table.set_header(vec![
        "Package", "Address", "Deadline", "Truck", "Delivered", "Status",
    ]);

    for snapshot in snapshots {
        table.add_row(vec![
            snapshot.id.to_string(),
            snapshot.address.clone(),
            snapshot.deadline.to_string(),
            snapshot
                .truck
                .map(|truck| truck.to_string())
                .unwrap_or_else(|| String::from("-")),
            snapshot
                .delivery_time
                .map(|time| time.strftime("%H:%M:%S").to_string())
                .unwrap_or_else(|| String::from("-")),
            snapshot.status.to_string(),
        ]);
    }

    println!("Package statuses at {}", at.strftime("%H:%M"));
    println!("{table}");
}
