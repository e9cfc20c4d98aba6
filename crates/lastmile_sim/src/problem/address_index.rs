use crate::define_index_newtype;

define_index_newtype!(LocationIdx);

/// Resolves an address string to its row in the distance table. Row order
/// matches the distance matrix's row/column order, so the resolved index is
/// usable directly as a matrix coordinate.
#[derive(Debug, Clone, Default)]
pub struct AddressIndex {
    rows: Vec<String>,
}

impl AddressIndex {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Substring match against each row, first hit wins. Package addresses
    /// are shorter than the table entries (which carry city/zip suffixes),
    /// so the package address is the needle.
    pub fn resolve(&self, address: &str) -> Option<LocationIdx> {
        self.rows
            .iter()
            .position(|row| row.contains(address))
            .map(LocationIdx::new)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
