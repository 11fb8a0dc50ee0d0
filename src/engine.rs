use serde::{Deserialize, Serialize};

use crate::grid::{ConfigError, Grid, GridConfig};
use crate::region::no_more_destroyable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
	Playing,
	Won,
	Stuck,
}

// Single owner of one mutable grid. Callers drive a move through the
// grid and region operations directly and ask the engine where the round
// stands once the gravity passes have run.
#[derive(Debug)]
pub struct Engine {
	pub grid: Grid,
	config: GridConfig,
}

impl Engine {
	pub fn new(config: GridConfig, seed: u64) -> Result<Self, ConfigError> {
		let grid = Grid::generate(&config, seed)?;
		Ok(Self { grid, config })
	}

	pub fn config(&self) -> &GridConfig {
		&self.config
	}

	// Replaces the grid for a fresh round with the same options.
	pub fn new_game(&mut self, seed: u64) -> Result<(), ConfigError> {
		self.grid = Grid::generate(&self.config, seed)?;
		Ok(())
	}

	pub fn status(&self) -> RoundStatus {
		if !no_more_destroyable(&self.grid) {
			RoundStatus::Playing
		} else if self.grid.width() == 0 {
			RoundStatus::Won
		} else {
			RoundStatus::Stuck
		}
	}
}
