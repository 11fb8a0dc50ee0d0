use std::collections::HashSet;

use crate::coords::Pos;
use crate::grid::Grid;

pub fn is_destroyable(grid: &Grid, p: Pos) -> bool {
    match grid.get(p) {
        Some(brick) => p
            .neighbors()
            .iter()
            .any(|&n| grid.color_matches(n, brick.color)),
        None => false,
    }
}

// Round-over check: true once no occupied cell has a same-color neighbor.
pub fn no_more_destroyable(grid: &Grid) -> bool {
    for (x, column) in grid.columns().iter().enumerate() {
        for (y, slot) in column.iter().enumerate() {
            if slot.is_some() && is_destroyable(grid, Pos::new(x as i32, y as i32)) {
                return false;
            }
        }
    }
    true
}

// Flood fill over the 4-connected same-color neighborhood of the seed.
// Each position is visited at most once; the region set doubles as the
// visited set. A non-empty result always has at least two members,
// since the seed must be destroyable to start.
pub fn compute_region(grid: &Grid, seed: Pos) -> HashSet<Pos> {
    let mut region = HashSet::new();
    let color = match grid.get(seed) {
        Some(brick) if is_destroyable(grid, seed) => brick.color,
        _ => return region,
    };
    region.insert(seed);
    let mut worklist = vec![seed];
    while let Some(p) = worklist.pop() {
        for n in p.neighbors() {
            if grid.color_matches(n, color) && region.insert(n) {
                worklist.push(n);
            }
        }
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brick::Brick;

    fn brick_grid(colors: &[&[u8]]) -> Grid {
        Grid::from_columns(
            colors
                .iter()
                .map(|col| col.iter().map(|&c| Some(Brick::new(c))).collect())
                .collect(),
        )
    }

    #[test]
    fn lone_brick_is_not_destroyable() {
        let grid = brick_grid(&[&[0]]);
        assert!(!is_destroyable(&grid, Pos::new(0, 0)));
        assert!(no_more_destroyable(&grid));
    }

    #[test]
    fn differing_neighbors_do_not_count() {
        let grid = brick_grid(&[&[0], &[1]]);
        assert!(!is_destroyable(&grid, Pos::new(0, 0)));
        assert!(!is_destroyable(&grid, Pos::new(1, 0)));
        assert!(no_more_destroyable(&grid));
    }

    #[test]
    fn any_same_color_neighbor_makes_a_brick_destroyable() {
        let grid = brick_grid(&[&[0, 0], &[1, 2]]);
        assert!(is_destroyable(&grid, Pos::new(0, 0)));
        assert!(is_destroyable(&grid, Pos::new(0, 1)));
        assert!(!is_destroyable(&grid, Pos::new(1, 0)));
        assert!(!no_more_destroyable(&grid));
    }

    #[test]
    fn absent_and_out_of_range_cells_are_not_destroyable() {
        let mut grid = brick_grid(&[&[0, 0]]);
        assert!(!is_destroyable(&grid, Pos::new(5, 5)));
        grid.remove_region(&compute_region(&grid, Pos::new(0, 0)));
        assert!(!is_destroyable(&grid, Pos::new(0, 0)));
    }

    #[test]
    fn region_is_empty_iff_seed_is_not_destroyable() {
        let grid = brick_grid(&[&[0], &[1]]);
        assert!(compute_region(&grid, Pos::new(0, 0)).is_empty());
        assert!(compute_region(&grid, Pos::new(7, 0)).is_empty());
    }

    #[test]
    fn region_spans_columns() {
        // Column 0 holds two 0-bricks, column 1 holds one; all connect.
        let grid = brick_grid(&[&[0, 0], &[0]]);
        let region = compute_region(&grid, Pos::new(0, 0));
        let expected: HashSet<Pos> = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0)]
            .into_iter()
            .collect();
        assert_eq!(region, expected);
    }

    #[test]
    fn region_stops_at_color_boundaries() {
        // The 0-bricks snake from (0,0) up and over to (2,2); the 1-bricks
        // fence them in without joining the region.
        let grid = brick_grid(&[&[0, 0, 1], &[1, 0, 0], &[1, 1, 0]]);
        let region = compute_region(&grid, Pos::new(0, 0));
        assert_eq!(region.len(), 5);
        for &p in &region {
            assert_eq!(grid.get(p), Some(Brick::new(0)));
        }
        assert!(region.contains(&Pos::new(2, 2)));
        assert!(!region.contains(&Pos::new(1, 0)));
        assert!(!region.contains(&Pos::new(0, 2)));
    }

    #[test]
    fn region_is_stable_across_calls_and_seeds() {
        let grid = brick_grid(&[&[0, 0], &[0, 1]]);
        let a = compute_region(&grid, Pos::new(0, 0));
        let b = compute_region(&grid, Pos::new(0, 0));
        assert_eq!(a, b);
        // Seeding from another member of the same region yields the same set.
        let c = compute_region(&grid, Pos::new(1, 0));
        assert_eq!(a, c);
    }
}
