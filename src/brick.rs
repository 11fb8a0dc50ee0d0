use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
	pub color: u8,
}

impl Brick {
	pub fn new(color: u8) -> Self {
		Self { color }
	}
}


