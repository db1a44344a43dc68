use super::{Histogram, DAYS_IN_WINDOW};
use std::collections::HashMap;

pub type Column = Vec<u32>;

/// Week-indexed columns of up to seven day counts, week 0 = current week,
/// column index 0 = Sunday.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    cols: HashMap<usize, Column>,
}

impl CalendarGrid {
    /// Decompose day offsets into week columns: offset `k` lands at week
    /// `k / 7`, row `k % 7`. The oldest week keeps its partial column.
    pub fn build(hist: &Histogram) -> Self {
        let mut cols: HashMap<usize, Column> = HashMap::new();
        let mut col = Column::new();

        for offset in 0..=DAYS_IN_WINDOW {
            let week = offset / 7;
            if offset % 7 == 0 {
                col = Column::new();
            }
            col.push(hist.get(offset));
            if offset % 7 == 6 {
                cols.insert(week, std::mem::take(&mut col));
            }
        }
        if !col.is_empty() {
            cols.insert(DAYS_IN_WINDOW / 7, col);
        }

        Self { cols }
    }

    /// `None` for absent weeks and for rows past a column's length.
    pub fn cell(&self, week: usize, row: usize) -> Option<u32> {
        self.cols.get(&week).and_then(|col| col.get(row)).copied()
    }
}
