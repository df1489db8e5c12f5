use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Single coordinate axis used for category and clue positions.
pub type Coord = u8;

/// Position of a cell on the board, `category` selects the column and `clue` the row.
///
/// Values can only be built in range, so holding one is proof that it addresses a clue of any loaded board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCellCoord")]
pub struct CellCoord {
    category: Coord,
    clue: Coord,
}

/// Unchecked wire shape of [`CellCoord`], only accepted through [`CellCoord::new`].
#[derive(Deserialize)]
struct RawCellCoord {
    category: usize,
    clue: usize,
}

impl TryFrom<RawCellCoord> for CellCoord {
    type Error = GameError;

    fn try_from(raw: RawCellCoord) -> Result<Self> {
        Self::new(raw.category, raw.clue)
    }
}

impl CellCoord {
    pub fn new(category: usize, clue: usize) -> Result<Self> {
        if category < NUM_CATEGORIES && clue < NUM_QUESTIONS_PER_CAT {
            Ok(Self {
                category: category as Coord,
                clue: clue as Coord,
            })
        } else {
            Err(GameError::IndexOutOfRange)
        }
    }

    pub const fn category(self) -> usize {
        self.category as usize
    }

    pub const fn clue(self) -> usize {
        self.clue as usize
    }

    /// Coordinates of one board row, left to right. Empty when `clue` is out of range.
    pub fn row(clue: usize) -> impl Iterator<Item = CellCoord> {
        let clue = (clue < NUM_QUESTIONS_PER_CAT).then_some(clue as Coord);
        (0..NUM_CATEGORIES).filter_map(move |category| {
            clue.map(|clue| CellCoord {
                category: category as Coord,
                clue,
            })
        })
    }

    /// All coordinates of a board, row by row.
    pub fn iter_all() -> impl Iterator<Item = CellCoord> {
        (0..NUM_QUESTIONS_PER_CAT).flat_map(Self::row)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}
