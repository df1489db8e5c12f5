use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// Fixed `NUM_CATEGORIES` by `NUM_QUESTIONS_PER_CAT` grid of clues for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Builds a board out of fully loaded categories.
    ///
    /// The loading pipeline already samples to the right dimensions, anything else is reported as
    /// [`GameError::InvalidBoardShape`] so that every [`CellCoord`] stays addressable.
    pub fn load(categories: Vec<Category>) -> Result<Self> {
        let well_formed = categories.len() == NUM_CATEGORIES
            && categories
                .iter()
                .all(|category| category.clues.len() == NUM_QUESTIONS_PER_CAT);

        if well_formed {
            Ok(Self { categories })
        } else {
            Err(GameError::InvalidBoardShape)
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn clue(&self, category: usize, clue: usize) -> Result<&Clue> {
        Ok(&self[CellCoord::new(category, clue)?])
    }

    pub fn clue_mut(&mut self, category: usize, clue: usize) -> Result<&mut Clue> {
        Ok(&mut self[CellCoord::new(category, clue)?])
    }

    /// Advances the clue at `coords`, see [`Clue::advance`].
    pub fn reveal(&mut self, coords: CellCoord) -> RevealOutcome<'_> {
        let clue = &mut self[coords];
        log::trace!("advance {} from {:?}", coords, clue.showing());
        clue.advance()
    }

    /// Every clue has been answered.
    pub fn is_cleared(&self) -> bool {
        CellCoord::iter_all().all(|coords| self[coords].showing().is_finished())
    }
}

impl Index<CellCoord> for Board {
    type Output = Clue;

    fn index(&self, coords: CellCoord) -> &Self::Output {
        &self.categories[coords.category()].clues[coords.clue()]
    }
}

impl IndexMut<CellCoord> for Board {
    fn index_mut(&mut self, coords: CellCoord) -> &mut Self::Output {
        &mut self.categories[coords.category()].clues[coords.clue()]
    }
}
