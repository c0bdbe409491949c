use serde::{Deserialize, Serialize};

/// Work done by a single rectangle query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryTrace {
    /// Outer (x) entries yielded by the column range scan
    pub columns_visited: usize,
    /// Inner (y) entries yielded by the row range scans
    pub cells_visited: usize,
}

impl QueryTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_column(&mut self) {
        self.columns_visited += 1;
    }

    pub fn record_cell(&mut self) {
        self.cells_visited += 1;
    }
}

/// Snapshot of a map's shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStats {
    /// Number of stored coordinates
    pub entries: usize,
    /// Columns present in the outer index, including empty ones
    pub columns: usize,
    /// Columns kept as placeholders with no entries
    pub empty_columns: usize,
}
