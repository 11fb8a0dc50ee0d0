use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::brick::Brick;
use crate::coords::Pos;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("At least one color is required")]
    NoColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    pub nb_colors: u8,
}

impl GridConfig {
    pub fn new(width: i32, height: i32, nb_colors: u8) -> Self {
        Self {
            width,
            height,
            nb_colors,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 0 || self.height < 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.nb_colors == 0 {
            return Err(ConfigError::NoColors);
        }
        Ok(())
    }
}

// Column-major brick storage. Columns are bottom-indexed: index 0 is the
// lowest row. Columns shrink when gravity is applied and the column list
// itself shrinks when emptied columns are dropped; nothing ever regrows.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: Vec<Vec<Option<Brick>>>,
}

impl Grid {
    pub fn generate(config: &GridConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate_with(config, &mut rng)
    }

    pub fn generate_with(config: &GridConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut columns = Vec::with_capacity(config.width as usize);
        for _ in 0..config.width {
            let mut column = Vec::with_capacity(config.height as usize);
            for _ in 0..config.height {
                column.push(Some(Brick::new(rng.gen_range(0..config.nb_colors))));
            }
            columns.push(column);
        }
        Ok(Self { columns })
    }

    pub fn from_columns(columns: Vec<Vec<Option<Brick>>>) -> Self {
        Self { columns }
    }

    fn slot(&self, p: Pos) -> Option<&Option<Brick>> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.columns.get(p.x as usize)?.get(p.y as usize)
    }

    pub fn get(&self, p: Pos) -> Option<Brick> {
        self.slot(p).copied().flatten()
    }

    pub fn exists(&self, p: Pos) -> bool {
        self.get(p).is_some()
    }

    pub fn color_matches(&self, p: Pos, color: u8) -> bool {
        self.get(p).map(|b| b.color == color).unwrap_or(false)
    }

    pub fn columns(&self) -> &[Vec<Option<Brick>>] {
        &self.columns
    }

    pub fn column(&self, x: i32) -> &[Option<Brick>] {
        if x < 0 {
            return &[];
        }
        self.columns
            .get(x as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // Current number of columns; shrinks after horizontal gravity.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn brick_count(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.iter().filter(|s| s.is_some()).count())
            .sum()
    }

    // Marks every listed cell absent. Positions that are out of range or
    // already absent are ignored. The grid is not compacted here; the
    // caller runs the gravity passes as a separate step.
    pub fn remove_region(&mut self, region: &HashSet<Pos>) {
        for &p in region {
            if p.x < 0 || p.y < 0 {
                continue;
            }
            if let Some(column) = self.columns.get_mut(p.x as usize) {
                if let Some(slot) = column.get_mut(p.y as usize) {
                    *slot = None;
                }
            }
        }
    }

    // Drops absent slots so every column is packed from the bottom,
    // preserving the relative order of the surviving bricks.
    pub fn apply_vertical_gravity(&mut self) {
        for column in &mut self.columns {
            column.retain(Option::is_some);
        }
    }

    // Drops columns emptied by the vertical pass and packs the rest to
    // the left. Only zero-length columns go; run the vertical pass first.
    pub fn apply_horizontal_gravity(&mut self) {
        self.columns.retain(|column| !column.is_empty());
    }
}
