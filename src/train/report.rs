use serde::{Deserialize, Serialize};

/// Outcome of the local retry loop for one training row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowStats {
    /// Weight/bias updates applied to this row (1 ..= epochs).
    pub updates: usize,
    /// Error measured just before the last update.
    pub last_error: f64,
}

/// Per-row statistics from a single `Unit::train` call, in row order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    pub rows: Vec<RowStats>,
}

impl TrainReport {
    pub fn with_capacity(rows: usize) -> Self {
        TrainReport { rows: Vec::with_capacity(rows) }
    }

    pub fn push(&mut self, stats: RowStats) {
        self.rows.push(stats);
    }

    pub fn total_updates(&self) -> usize {
        self.rows.iter().map(|r| r.updates).sum()
    }

    /// Mean absolute `last_error` over all rows; 0 for an empty report.
    pub fn mean_abs_error(&self) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        self.rows.iter().map(|r| r.last_error.abs()).sum::<f64>() / self.rows.len() as f64
    }
}
