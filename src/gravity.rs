use serde::{Deserialize, Serialize};

use crate::grid::Grid;

// One gravity pass, described before any mutation. An external animator
// consumes the plan, then the caller runs the two apply operations on the
// grid: vertical first (bricks fall), then horizontal (columns slide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fall {
    pub y: i32,
    pub dy: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMove {
    pub shift: u32,
    pub falls: Vec<Fall>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GravityPlan {
    pub columns: Vec<ColumnMove>,
}

// Must run on the post-removal, pre-compaction grid. Every surviving
// brick of a non-empty column gets a fall entry (dy 0 when nothing below
// it is absent); a wholly-empty column gets no fall entries and instead
// bumps the shift of every column to its right.
pub fn compute_gravity(grid: &Grid) -> GravityPlan {
    let mut columns = vec![ColumnMove::default(); grid.width()];
    for (x, column) in grid.columns().iter().enumerate() {
        if column.iter().all(Option::is_none) {
            for m in &mut columns[x + 1..] {
                m.shift += 1;
            }
        } else {
            let mut gaps = 0u32;
            for (y, slot) in column.iter().enumerate() {
                if slot.is_none() {
                    gaps += 1;
                } else {
                    columns[x].falls.push(Fall { y: y as i32, dy: gaps });
                }
            }
        }
    }
    GravityPlan { columns }
}
