//! Breakable block grid
//!
//! Only the broken flag of each block is stored. Which block owns a screen
//! cell, and what that cell looks like, is derived from the cell position on
//! every query, so a broken block disappears from rendering and collision the
//! moment its flag is set.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Index of a block in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId {
    pub row: usize,
    pub col: usize,
}

/// Shape of a single cell of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    TopCorner,
    TopEdge,
    BottomCorner,
    BottomEdge,
    LeftEdge,
    RightEdge,
    Interior,
    /// Cell belongs to a broken block
    Absent,
}

impl Glyph {
    /// Character to draw, `None` for nothing
    pub fn as_char(self) -> Option<char> {
        match self {
            Glyph::TopCorner => Some('.'),
            Glyph::BottomCorner => Some('\''),
            Glyph::TopEdge | Glyph::BottomEdge => Some('-'),
            Glyph::LeftEdge | Glyph::RightEdge => Some('|'),
            Glyph::Interior => Some(' '),
            Glyph::Absent => None,
        }
    }

    /// Left or right side of a block
    pub fn is_vertical_edge(self) -> bool {
        matches!(self, Glyph::LeftEdge | Glyph::RightEdge)
    }

    /// Top or bottom side of a block (corners excluded)
    pub fn is_horizontal_edge(self) -> bool {
        matches!(self, Glyph::TopEdge | Glyph::BottomEdge)
    }

    /// Classify a cell by its offset inside a block's bounding box.
    ///
    /// Corners are checked before edges.
    fn from_offset(dy: i32, dx: i32) -> Self {
        let side = dx == 0 || dx == BLOCK_W - 1;
        if dy == 0 {
            if side { Glyph::TopCorner } else { Glyph::TopEdge }
        } else if dy == BLOCK_H - 1 {
            if side { Glyph::BottomCorner } else { Glyph::BottomEdge }
        } else if dx == 0 {
            Glyph::LeftEdge
        } else if dx == BLOCK_W - 1 {
            Glyph::RightEdge
        } else {
            Glyph::Interior
        }
    }
}

/// Height of the block region in rows
pub const REGION_H: i32 = BLOCK_ROWS as i32 * BLOCK_H;
/// Width of the block region in columns
pub const REGION_W: i32 = BLOCK_COLS as i32 * BLOCK_W;

/// The `BLOCK_ROWS x BLOCK_COLS` grid of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockGrid {
    broken: [[bool; BLOCK_COLS]; BLOCK_ROWS],
}

impl BlockGrid {
    /// All blocks intact
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `(row, col)` lies inside the block region
    pub fn contains(row: i32, col: i32) -> bool {
        (0..REGION_H).contains(&row) && (0..REGION_W).contains(&col)
    }

    /// Block owning the screen cell, `None` outside the block region
    pub fn owner_of(&self, row: i32, col: i32) -> Option<BlockId> {
        if !Self::contains(row, col) {
            return None;
        }
        Some(BlockId {
            row: (row / BLOCK_H) as usize,
            col: (col / BLOCK_W) as usize,
        })
    }

    /// Shape of the screen cell, `None` outside the block region
    pub fn shape_at(&self, row: i32, col: i32) -> Option<Glyph> {
        let id = self.owner_of(row, col)?;
        if self.is_broken(id) {
            return Some(Glyph::Absent);
        }
        Some(Glyph::from_offset(row % BLOCK_H, col % BLOCK_W))
    }

    pub fn is_broken(&self, id: BlockId) -> bool {
        self.broken[id.row][id.col]
    }

    /// Mark a block broken. Returns true if it was intact before the call.
    pub fn break_block(&mut self, id: BlockId) -> bool {
        let flag = &mut self.broken[id.row][id.col];
        let was_intact = !*flag;
        *flag = true;
        was_intact
    }

    /// Number of broken blocks
    pub fn broken_count(&self) -> usize {
        self.broken.iter().flatten().filter(|&&b| b).count()
    }

    /// Win condition
    pub fn all_broken(&self) -> bool {
        self.broken.iter().flatten().all(|&b| b)
    }

    /// Iterate every visible block cell as `(row, col, char)`
    pub fn visible_cells(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        (0..REGION_H).flat_map(move |row| {
            (0..REGION_W).filter_map(move |col| {
                self.shape_at(row, col)
                    .and_then(Glyph::as_char)
                    .map(|ch| (row, col, ch))
            })
        })
    }
}
