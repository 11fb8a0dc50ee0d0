use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    // Orthogonal neighbors: below, above, left, right.
    pub fn neighbors(self) -> [Pos; 4] {
        [
            Pos { x: self.x, y: self.y - 1 },
            Pos { x: self.x, y: self.y + 1 },
            Pos { x: self.x - 1, y: self.y },
            Pos { x: self.x + 1, y: self.y },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_orthogonal() {
        let n = Pos::new(2, 3).neighbors();
        assert!(n.contains(&Pos::new(2, 2)));
        assert!(n.contains(&Pos::new(2, 4)));
        assert!(n.contains(&Pos::new(1, 3)));
        assert!(n.contains(&Pos::new(3, 3)));
    }

    #[test]
    fn neighbors_may_leave_the_grid() {
        let n = Pos::new(0, 0).neighbors();
        assert!(n.contains(&Pos::new(-1, 0)));
        assert!(n.contains(&Pos::new(0, -1)));
    }
}
