use crate::problem::address_index::LocationIdx;

pub type Distance = f64;

/// Flat row-major storage of pairwise distances. The index for a pair is
/// `from * num_locations + to`. Input tables are often only triangular;
/// blank cells stay `None` and lookups fall back to the transposed cell,
/// which makes the matrix symmetric regardless of which half was filled in.
#[derive(Debug, Clone, Default)]
pub struct DistanceMatrix {
    cells: Vec<Option<Distance>>,
    num_locations: usize,
}

impl DistanceMatrix {
    pub fn new(rows: Vec<Vec<Option<Distance>>>) -> Self {
        let num_locations = rows.len();
        let mut cells = vec![None; num_locations * num_locations];

        for (i, row) in rows.into_iter().enumerate() {
            // Triangular inputs ship short rows; anything past the row end
            // stays blank and resolves through the transpose.
            for (j, cell) in row.into_iter().take(num_locations).enumerate() {
                cells[i * num_locations + j] = cell;
            }
        }

        Self {
            cells,
            num_locations,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline(always)]
    fn index(&self, from: LocationIdx, to: LocationIdx) -> usize {
        from.get() * self.num_locations + to.get()
    }

    pub fn distance(&self, from: LocationIdx, to: LocationIdx) -> Option<Distance> {
        if from.get() >= self.num_locations || to.get() >= self.num_locations {
            return None;
        }

        self.cells[self.index(from, to)]
            .or_else(|| self.cells[self.index(to, from)])
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }
}
