//! Immutable grid snapshots and the next-generation transition.
//!
//! A [`Generation`] is the live-cell set of a bounded `width x height`
//! grid plus the [`RuleRef`] in effect. It never changes after
//! construction: [`next_generation()`](Generation::next_generation)
//! returns a new value with the same dimensions and rule.
//!
//! # Transition
//!
//! Only cells adjacent to a live cell can change state, so the transition
//! walks the live set, not the grid:
//!
//! 1. emit the in-bounds Moore neighbours of every live cell,
//! 2. count occurrences per distinct coordinate (the live-neighbour count),
//! 3. keep each candidate the rule accepts.
//!
//! Cells with zero live neighbours are never candidates.
//!
//! # Textual form
//!
//! `Display` renders row-major, `'o'` for alive and `'.'` for dead, rows
//! joined by `'\n'` with no trailing line break. Renderers index into this
//! string, so the layout is fixed.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

use crate::error::GridError;
use crate::rule::RuleRef;
use crate::Coordinates;

/// Character for a live cell in the textual form.
pub const ALIVE_CHAR: char = 'o';
/// Character for a dead cell in the textual form.
pub const DEAD_CHAR: char = '.';

/// All 8 Moore offsets: N, S, W, E, NW, NE, SW, SE.
const MOORE_OFFSETS: [Coordinates; 8] = [
    Coordinates::new(0, -1),
    Coordinates::new(0, 1),
    Coordinates::new(-1, 0),
    Coordinates::new(1, 0),
    Coordinates::new(-1, -1),
    Coordinates::new(1, -1),
    Coordinates::new(-1, 1),
    Coordinates::new(1, 1),
];

/// One immutable snapshot of the grid.
///
/// Cloning is cheap: the live set is shared behind an [`Arc`].
///
/// Equality is structural over width, height, rule and live set. Custom
/// rules compare by identity (see [`RuleRef`]).
#[derive(Clone)]
pub struct Generation {
    /// Live cells, kept in row-major order so hashing is order-stable.
    cells: Arc<IndexSet<Coordinates>>,
    width: u32,
    height: u32,
    rule: RuleRef,
}

impl Generation {
    /// Create a generation from the given live cells.
    ///
    /// Cells are taken as given: a cell outside the grid is stored and
    /// counted, but never rendered and never survives a transition. Use
    /// [`try_new`](Self::try_new) to reject such cells instead.
    pub fn new(
        cells: impl IntoIterator<Item = Coordinates>,
        width: u32,
        height: u32,
        rule: impl Into<RuleRef>,
    ) -> Self {
        let mut cells: IndexSet<Coordinates> = cells.into_iter().collect();
        cells.sort();
        Self {
            cells: Arc::new(cells),
            width,
            height,
            rule: rule.into(),
        }
    }

    /// Like [`new`](Self::new), but fails on the first cell outside
    /// `[0, width) x [0, height)`.
    pub fn try_new(
        cells: impl IntoIterator<Item = Coordinates>,
        width: u32,
        height: u32,
        rule: impl Into<RuleRef>,
    ) -> Result<Self, GridError> {
        let generation = Self::new(cells, width, height, rule);
        if let Some(&cell) = generation.cells.iter().find(|c| !generation.contains(**c)) {
            return Err(GridError::CellOutOfBounds {
                cell,
                width,
                height,
            });
        }
        Ok(generation)
    }

    /// Grid width (number of columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height (number of rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The rule this generation evolves under.
    pub fn rule(&self) -> &RuleRef {
        &self.rule
    }

    /// Number of live cells.
    pub fn alive_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cell is alive.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// O(1) membership test.
    pub fn is_alive_at(&self, cell: Coordinates) -> bool {
        self.cells.contains(&cell)
    }

    /// Shorthand for `is_alive_at(Coordinates::new(x, y))`.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.is_alive_at(Coordinates::new(x, y))
    }

    /// Live cells in row-major order.
    pub fn alive_cells(&self) -> impl ExactSizeIterator<Item = Coordinates> + '_ {
        self.cells.iter().copied()
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Coordinates) -> bool {
        cell.x() >= 0
            && cell.y() >= 0
            && (cell.x() as u32) < self.width
            && (cell.y() as u32) < self.height
    }

    /// The in-bounds Moore neighbours of `cell`.
    ///
    /// Corners have 3, edges 5, interior cells 8.
    pub fn neighbours(&self, cell: Coordinates) -> SmallVec<[Coordinates; 8]> {
        MOORE_OFFSETS
            .iter()
            .map(|&offset| cell + offset)
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Number of live cells among the Moore neighbours of `cell`.
    pub fn live_neighbours(&self, cell: Coordinates) -> u32 {
        self.neighbours(cell)
            .into_iter()
            .filter(|&n| self.is_alive_at(n))
            .count() as u32
    }

    /// Compute the next generation.
    ///
    /// Never mutates `self`. The result has the same width, height and
    /// rule.
    pub fn next_generation(&self) -> Generation {
        let mut counts: IndexMap<Coordinates, u32> =
            IndexMap::with_capacity(self.cells.len() * MOORE_OFFSETS.len());
        for &cell in self.cells.iter() {
            for neighbour in self.neighbours(cell) {
                *counts.entry(neighbour).or_insert(0) += 1;
            }
        }

        let mut next: IndexSet<Coordinates> = counts
            .into_iter()
            .filter(|&(cell, n)| self.rule.evaluate(self, cell, n))
            .map(|(cell, _)| cell)
            .collect();
        next.sort();

        Generation {
            cells: Arc::new(next),
            width: self.width,
            height: self.height,
            rule: self.rule.clone(),
        }
    }

    /// Lazy sequence starting with `self`, then each successive generation.
    ///
    /// Each generation is computed only when requested.
    pub fn successors(&self) -> Generations {
        Generations {
            pending: Some(self.clone()),
            last: None,
        }
    }
}

impl PartialEq for Generation {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rule == other.rule
            && (Arc::ptr_eq(&self.cells, &other.cells) || self.cells == other.cells)
    }
}

impl Eq for Generation {}

impl Hash for Generation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        self.rule.hash(state);
        self.cells.len().hash(state);
        // Row-major order is maintained by every constructor, so equal
        // sets hash the same sequence.
        for cell in self.cells.iter() {
            cell.hash(state);
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut row = String::with_capacity(self.width as usize);
        for y in 0..self.height {
            row.clear();
            for x in 0..self.width {
                let alive = self.is_alive(x as i32, y as i32);
                row.push(if alive { ALIVE_CHAR } else { DEAD_CHAR });
            }
            f.write_str(&row)?;
            if y + 1 != self.height {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generation")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rule", &self.rule)
            .field("alive", &self.cells.len())
            .finish()
    }
}

// ── Generations ─────────────────────────────────────────────────────

/// Single-pass, unbounded iterator over successive generations.
///
/// Returned by [`Generation::successors`]. The first item is the starting
/// generation itself. To restart, call `successors()` again on the
/// starting generation.
#[derive(Debug, Clone)]
pub struct Generations {
    pending: Option<Generation>,
    last: Option<Generation>,
}

impl Iterator for Generations {
    type Item = Generation;

    fn next(&mut self) -> Option<Generation> {
        let generation = match self.pending.take() {
            Some(first) => first,
            None => self.last.as_ref()?.next_generation(),
        };
        self.last = Some(generation.clone());
        Some(generation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl std::iter::FusedIterator for Generations {}
