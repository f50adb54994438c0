//! Per-cell move/capture flags produced by a move query.

use crate::board::Location;

/// Flags for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Highlight {
    pub movable: bool,
    pub capturable: bool,
}

impl Highlight {
    pub fn is_any(self) -> bool {
        self.movable || self.capturable
    }
}

/// Dense `height x width` grid of highlights, row-major by `y`.
///
/// Derived fresh for each query and never stored on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightGrid {
    width: i32,
    height: i32,
    cells: Vec<Highlight>,
}

impl HighlightGrid {
    pub fn new(width: i32, height: i32) -> Self {
        HighlightGrid {
            width,
            height,
            cells: vec![Highlight::default(); width.max(0) as usize * height.max(0) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, loc: Location) -> Option<usize> {
        (loc.x >= 0 && loc.x < self.width && loc.y >= 0 && loc.y < self.height)
            .then(|| loc.y as usize * self.width as usize + loc.x as usize)
    }

    /// Flags at `loc`; off-grid locations read as unset.
    pub fn get(&self, loc: Location) -> Highlight {
        self.index(loc).map(|i| self.cells[i]).unwrap_or_default()
    }

    /// Sets the movable flag. Flags are only ever raised, never cleared.
    pub fn mark_movable(&mut self, loc: Location) {
        if let Some(i) = self.index(loc) {
            self.cells[i].movable = true;
        }
    }

    pub fn mark_capturable(&mut self, loc: Location) {
        if let Some(i) = self.index(loc) {
            self.cells[i].capturable = true;
        }
    }

    /// Iterates over every cell with its location, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Location, Highlight)> + '_ {
        self.cells.iter().enumerate().map(move |(i, h)| {
            let i = i as i32;
            (Location::new(i % self.width, i / self.width), *h)
        })
    }

    pub fn movable(&self) -> Vec<Location> {
        self.iter().filter(|(_, h)| h.movable).map(|(l, _)| l).collect()
    }

    pub fn capturable(&self) -> Vec<Location> {
        self.iter().filter(|(_, h)| h.capturable).map(|(l, _)| l).collect()
    }
}
