use super::{Cell, LiveSet};

/// A named arrangement of live cells that can be stamped onto a set
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: Vec<(i32, i32)>, // Relative coordinates of alive cells
}

impl Pattern {
    pub fn new(name: &'static str, cells: Vec<(i32, i32)>) -> Self {
        Self { name, cells }
    }

    /// Place the pattern into the set with its origin at (x, y)
    pub fn place_on(&self, set: &mut LiveSet, x: i32, y: i32) {
        for &(dx, dy) in &self.cells {
            set.insert(Cell::new(x + dx, y + dy));
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Single live cell
    pub fn dot() -> Pattern {
        Pattern::new("Dot", vec![(0, 0)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }
}
