use alloc::vec::Vec;
use jeopardy_protocol::{CategoryDetails, CategoryId};

use crate::*;

/// Remote provider of categories and their clues.
///
/// Implementations report transport problems as [`GameError::NetworkFailure`] and undecodable bodies as
/// [`GameError::MalformedResponse`]. Futures run on a single-threaded event loop, so they need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// Identifiers of up to `count` categories.
    async fn category_ids(&self, count: usize) -> Result<Vec<CategoryId>>;

    /// Title and full clue pool of one category.
    async fn category(&self, id: CategoryId) -> Result<CategoryDetails>;
}

impl<S: TriviaSource + ?Sized> TriviaSource for &S {
    async fn category_ids(&self, count: usize) -> Result<Vec<CategoryId>> {
        (**self).category_ids(count).await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetails> {
        (**self).category(id).await
    }
}
