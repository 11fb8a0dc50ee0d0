use crate::engine::RoundStatus;
use crate::grid::Grid;

// Plain-text projection of the grid for front-ends and test output.
// Top row first; a color digit per brick, '.' for anything absent.
pub fn render_rows(grid: &Grid) -> Vec<String> {
	let height = grid.columns().iter().map(Vec::len).max().unwrap_or(0);
	let mut out = Vec::with_capacity(height);
	for y in (0..height).rev() {
		let mut row = String::with_capacity(grid.width());
		for column in grid.columns() {
			match column.get(y).copied().flatten() {
				Some(brick) => {
					let digit = u32::from(brick.color) % 36;
					row.push(char::from_digit(digit, 36).unwrap_or('?'));
				}
				None => row.push('.'),
			}
		}
		out.push(row);
	}
	out
}

pub fn status_line(status: RoundStatus) -> &'static str {
	match status {
		RoundStatus::Playing => "",
		RoundStatus::Won => "you win !",
		RoundStatus::Stuck => "you lose !",
	}
}
