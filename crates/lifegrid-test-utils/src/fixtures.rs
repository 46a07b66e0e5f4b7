//! Canonical generations for tests.
//!
//! - [`blinker`]: period-2 oscillator on a 3x3 grid.
//! - [`block`]: still life on a 4x4 grid.
//! - [`glider`]: glider well inside a 20x20 grid.
//! - [`lone_cell`]: one cell that dies on the first step.

use lifegrid_core::{Coordinates, Generation, LifeRule, Pattern};

fn from_pattern(pattern: &Pattern, width: u32, height: u32) -> Generation {
    Generation::new(pattern.cells().iter().copied(), width, height, LifeRule::Conway)
}

/// Horizontal blinker on a 3x3 Conway grid.
pub fn blinker() -> Generation {
    from_pattern(&Pattern::blinker(), 3, 3)
}

/// 2x2 block at (1,1) on a 4x4 Conway grid.
pub fn block() -> Generation {
    let cells = [(1, 1), (2, 1), (1, 2), (2, 2)].map(Coordinates::from);
    Generation::new(cells, 4, 4, LifeRule::Conway)
}

/// Glider translated by (8,4) on a 20x20 Conway grid.
pub fn glider() -> Generation {
    from_pattern(&Pattern::glider().translated(8, 4), 20, 20)
}

/// A single live cell in the middle of a 5x5 Conway grid.
pub fn lone_cell() -> Generation {
    Generation::new([Coordinates::new(2, 2)], 5, 5, LifeRule::Conway)
}
