//! Reusable live-cell configurations.
//!
//! A [`Pattern`] is a set of live cells plus the minimum `width x height`
//! a grid needs to hold it. Patterns are values: geometry transforms
//! return new patterns and leave the original untouched, and two
//! patterns are equal when their cell sets are.

use std::hash::{Hash, Hasher};

use indexmap::IndexSet;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::PatternError;
use crate::generation::ALIVE_CHAR;
use crate::Coordinates;

/// A named set of live cells with a minimum bounding size.
#[derive(Clone, Debug)]
pub struct Pattern {
    name: Option<String>,
    width: u32,
    height: u32,
    cells: IndexSet<Coordinates>,
}

impl Pattern {
    /// Create a pattern with an explicit bounding size.
    pub fn new(width: u32, height: u32, cells: impl IntoIterator<Item = Coordinates>) -> Self {
        let mut cells: IndexSet<Coordinates> = cells.into_iter().collect();
        cells.sort();
        Self {
            name: None,
            width,
            height,
            cells,
        }
    }

    /// Create a pattern whose size is the smallest box anchored at the
    /// origin that holds every non-negative cell.
    pub fn from_cells(cells: impl IntoIterator<Item = Coordinates>) -> Self {
        let cells: Vec<Coordinates> = cells.into_iter().collect();
        let extent = |axis: fn(&Coordinates) -> i32| -> u32 {
            cells
                .iter()
                .map(axis)
                .filter(|&v| v >= 0)
                .map(|v| v as u32 + 1)
                .max()
                .unwrap_or(0)
        };
        let width = extent(Coordinates::x);
        let height = extent(Coordinates::y);
        Self::new(width, height, cells)
    }

    /// Parse a textual grid: line `n` is row `n`, character `i` is column
    /// `i`, and every occurrence of `live` marks a live cell. Any other
    /// character is dead.
    ///
    /// Lines end with `\n` or `\r\n`. Trailing blank lines add no row,
    /// while empty text is one empty row. The width is the length of the
    /// longest line in characters.
    ///
    /// ```
    /// use lifegrid_core::{Coordinates, Pattern};
    ///
    /// let p = Pattern::parse(".o.\n..o\nooo", 'o');
    /// assert_eq!((p.width(), p.height()), (3, 3));
    /// assert!(p.cells().contains(&Coordinates::new(1, 0)));
    /// ```
    pub fn parse(text: &str, live: char) -> Self {
        let mut rows: Vec<&str> = text.lines().collect();
        if text.is_empty() {
            rows.push("");
        } else {
            while rows.last().is_some_and(|line| line.is_empty()) {
                rows.pop();
            }
        }
        let mut cells = Vec::new();
        let mut width = 0u32;
        let mut height = 0u32;
        for (row, line) in rows.into_iter().enumerate() {
            let mut len = 0u32;
            for (col, ch) in line.chars().enumerate() {
                if ch == live {
                    cells.push(Coordinates::new(col as i32, row as i32));
                }
                len += 1;
            }
            width = width.max(len);
            height += 1;
        }
        Self::new(width, height, cells)
    }

    /// Parse with the default live character `'o'`.
    pub fn parse_default(text: &str) -> Self {
        Self::parse(text, ALIVE_CHAR)
    }

    /// A random soup: every cell of a `width x height` box is alive with
    /// probability `density`. The same `seed` always yields the same soup.
    pub fn random(width: u32, height: u32, density: f64, seed: u64) -> Result<Self, PatternError> {
        if !density.is_finite() || !(0.0..=1.0).contains(&density) {
            return Err(PatternError::InvalidDensity { value: density });
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cells = Vec::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if rng.random_bool(density) {
                    cells.push(Coordinates::new(x, y));
                }
            }
        }
        Ok(Self::new(width, height, cells).named(format!("soup-{seed}")))
    }

    /// Attach a name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The pattern's name, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Minimum grid width required to hold the pattern.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Minimum grid height required to hold the pattern.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The live cells, in row-major order.
    pub fn cells(&self) -> &IndexSet<Coordinates> {
        &self.cells
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the pattern has no live cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // ── Transforms ──────────────────────────────────────────────

    /// Map every cell through `f`. Width, height and name are kept.
    pub fn transform(&self, f: impl Fn(Coordinates) -> Coordinates) -> Self {
        let mut cells: IndexSet<Coordinates> = self.cells.iter().map(|&c| f(c)).collect();
        cells.sort();
        Self {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Move the pattern so its origin lands on `origin`.
    pub fn translated_to(&self, origin: Coordinates) -> Self {
        self.transform(|c| c + origin)
    }

    /// Move the pattern by `(dx, dy)`.
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        self.translated_to(Coordinates::new(dx, dy))
    }

    /// Center the pattern in a `width x height` grid (integer halves).
    pub fn centered(&self, width: u32, height: u32) -> Self {
        let dx = (width / 2) as i32 - (self.width / 2) as i32;
        let dy = (height / 2) as i32 - (self.height / 2) as i32;
        self.translated(dx, dy)
    }

    /// Align the pattern with the top-right corner of a grid `width`
    /// columns wide.
    pub fn up_right(&self, width: u32) -> Self {
        self.translated(width as i32 - self.width as i32, 0)
    }

    // ── Built-ins ───────────────────────────────────────────────

    /// Period-2 oscillator, horizontal phase (3x3).
    pub fn blinker() -> Self {
        Self::new(3, 3, cells(&[(0, 1), (1, 1), (2, 1)])).named("blinker")
    }

    /// Period-2 oscillator (4x4).
    pub fn toad() -> Self {
        Self::new(4, 4, cells(&[(1, 1), (2, 1), (3, 1), (0, 2), (1, 2), (2, 2)])).named("toad")
    }

    /// Spaceship moving one cell down-left every 4 generations (5x4).
    pub fn glider() -> Self {
        Self::new(5, 4, cells(&[(3, 0), (2, 1), (2, 2), (3, 2), (4, 2)])).named("glider")
    }

    /// High-Life replicator (6x6).
    pub fn high_life_replicator() -> Self {
        Self::new(
            6,
            6,
            cells(&[
                (3, 1),
                (4, 1),
                (5, 1),
                (2, 2),
                (5, 2),
                (1, 3),
                (5, 3),
                (1, 4),
                (4, 4),
                (1, 5),
                (2, 5),
                (3, 5),
            ]),
        )
        .named("high-life-replicator")
    }
}

fn cells(points: &[(i32, i32)]) -> Vec<Coordinates> {
    points.iter().copied().map(Coordinates::from).collect()
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for cell in &self.cells {
            cell.hash(state);
        }
    }
}
