use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::{
    constants::{
        ADDRESS_CORRECTION_TIME, CORRECTED_ADDRESS, DELAYED_ARRIVAL, DELAYED_PACKAGE_IDS,
        PLACEHOLDER_ADDRESS, WRONG_ADDRESS_PACKAGE_ID,
    },
    problem::{
        address_index::AddressIndex,
        distance_matrix::DistanceMatrix,
        package::{AddressCorrection, Deadline, PackageBuilder, PackageId},
        package_store::PackageStore,
    },
};

#[derive(Error, Debug)]
pub enum TableError {
    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),
}

/// Splits one CSV row, honoring double-quoted fields (addresses carry
/// embedded commas). Quotes are stripped from the output.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}

fn rows(text: &str) -> impl Iterator<Item = (usize, Vec<String>)> {
    // Excel exports lead with a UTF-8 BOM.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(number, line)| (number + 1, split_row(line)))
}

/// Distance table: one row per location, blank cells allowed (triangular
/// exports). Unparseable cells are treated as blank and resolve through
/// the matrix's transpose fallback.
pub fn parse_distance_table(text: &str) -> DistanceMatrix {
    let parsed: Vec<Vec<Option<f64>>> = rows(text)
        .map(|(number, fields)| {
            fields
                .iter()
                .map(|cell| {
                    let cell = cell.trim();
                    if cell.is_empty() {
                        return None;
                    }
                    match cell.parse::<f64>() {
                        Ok(distance) => Some(distance),
                        Err(_) => {
                            warn!("distance row {number}: unreadable cell '{cell}'");
                            None
                        }
                    }
                })
                .collect()
        })
        .collect();

    DistanceMatrix::new(parsed)
}

/// Address table: the first field of each row is the lookup string; row
/// order matches the distance table.
pub fn parse_address_table(text: &str) -> AddressIndex {
    let entries = rows(text)
        .filter_map(|(number, mut fields)| {
            if fields.is_empty() || fields[0].trim().is_empty() {
                warn!("address row {number}: empty entry skipped");
                return None;
            }
            Some(std::mem::take(&mut fields[0]))
        })
        .collect();

    AddressIndex::new(entries)
}

/// Package table: `id,address,city,state,zip,deadline,weight[,note]`.
/// Malformed rows are logged and skipped; the rest of the table still
/// loads. Package 9 is known to ship with a bad address, so its record is
/// loaded with the placeholder and the pending 10:20 correction, and the
/// delayed ids get their 09:05 availability.
pub fn parse_package_table(text: &str) -> PackageStore {
    let mut store = PackageStore::new();

    for (number, fields) in rows(text) {
        if fields.len() < 7 {
            warn!("package row {number}: expected 7 fields, got {}", fields.len());
            continue;
        }

        let Ok(id) = fields[0].trim().parse::<u32>() else {
            warn!("package row {number}: bad id '{}'", fields[0]);
            continue;
        };

        let deadline = Deadline::parse(&fields[5]).unwrap_or_else(|| {
            warn!("package row {number}: unreadable deadline '{}', using EOD", fields[5]);
            Deadline::EndOfDay
        });
        let weight = fields[6].trim().parse::<f64>().unwrap_or_else(|_| {
            warn!("package row {number}: unreadable weight '{}'", fields[6]);
            0.0
        });

        let mut builder = PackageBuilder::default();
        builder.set_id(id);
        builder.set_city(fields[2].trim().to_owned());
        builder.set_state(fields[3].trim().to_owned());
        builder.set_zipcode(fields[4].trim().to_owned());
        builder.set_deadline(deadline);
        builder.set_weight(weight);

        if id == WRONG_ADDRESS_PACKAGE_ID {
            builder.set_address(String::from(PLACEHOLDER_ADDRESS));
            builder.set_correction(AddressCorrection {
                address: String::from(CORRECTED_ADDRESS),
                effective: ADDRESS_CORRECTION_TIME,
            });
        } else {
            builder.set_address(fields[1].trim().to_owned());
        }

        if DELAYED_PACKAGE_IDS.contains(&id) {
            builder.set_available_from(DELAYED_ARRIVAL);
        }

        store.insert(PackageId::new(id), builder.build());
    }

    store
}

pub fn load_distance_table<P: AsRef<Path>>(path: P) -> Result<DistanceMatrix, TableError> {
    Ok(parse_distance_table(&std::fs::read_to_string(path)?))
}

pub fn load_address_table<P: AsRef<Path>>(path: P) -> Result<AddressIndex, TableError> {
    Ok(parse_address_table(&std::fs::read_to_string(path)?))
}

pub fn load_package_table<P: AsRef<Path>>(path: P) -> Result<PackageStore, TableError> {
    Ok(parse_package_table(&std::fs::read_to_string(path)?))
}
