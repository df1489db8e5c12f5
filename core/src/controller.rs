use alloc::format;
use alloc::vec::Vec;
use core::future::Future;

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Ready,
}

impl UiState {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Owner of the current board and of the loading lifecycle around it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameController {
    config: LoadConfig,
    state: UiState,
    board: Option<Board>,
}

impl GameController {
    pub fn new(config: LoadConfig) -> Self {
        Self {
            config,
            state: UiState::Idle,
            board: None,
        }
    }

    pub fn config(&self) -> LoadConfig {
        self.config
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Starts a new game, dropping the current board.
    ///
    /// Returns `None` without touching `source` while a previous load is still in flight. Otherwise the returned
    /// future performs the whole load, its output goes back through [`GameController::finish_load`].
    pub fn start_game<S, R>(
        &mut self,
        source: S,
        sampler: R,
    ) -> Option<impl Future<Output = Result<Board>> + use<S, R>>
    where
        S: TriviaSource,
        R: Sampler,
    {
        if self.state.is_loading() {
            log::debug!("load already in progress, ignoring start");
            return None;
        }

        log::debug!("starting new game");
        self.state = UiState::Loading;
        self.board = None;
        Some(load_board(source, sampler, self.config))
    }

    /// Installs the outcome of a load started with [`GameController::start_game`].
    ///
    /// Errors are handed back unchanged and the controller stays in [`UiState::Loading`], recovering from that is
    /// up to the caller, see [`GameController::abandon_load`].
    pub fn finish_load(&mut self, result: Result<Board>) -> Result<()> {
        if !self.state.is_loading() {
            log::warn!("discarding load result, no load in progress");
            return Ok(());
        }

        let board = result?;
        log::debug!("board ready");
        self.board = Some(board);
        self.state = UiState::Ready;
        Ok(())
    }

    /// Gives up on a failed load so that a new game can be started.
    pub fn abandon_load(&mut self) {
        if self.state.is_loading() {
            log::debug!("abandoning load");
            self.state = UiState::Idle;
        }
    }

    pub fn reveal(&mut self, coords: CellCoord) -> Result<RevealOutcome<'_>> {
        match (self.state, self.board.as_mut()) {
            (UiState::Ready, Some(board)) => Ok(board.reveal(coords)),
            _ => Err(GameError::NotReady),
        }
    }
}

/// Fetches and samples a full board.
///
/// Categories are fetched one after the other, the first failure aborts the load and nothing fetched so far is kept.
pub async fn load_board<S, R>(source: S, mut sampler: R, config: LoadConfig) -> Result<Board>
where
    S: TriviaSource,
    R: Sampler,
{
    let mut ids = source.category_ids(config.category_pool).await?;
    ids.sort_unstable();
    ids.dedup();
    log::debug!("received {} category ids", ids.len());

    let offered = ids.len();
    let ids = sampler.sample(ids, NUM_CATEGORIES).ok_or_else(|| {
        GameError::MalformedResponse(format!(
            "need {NUM_CATEGORIES} categories, source offered {offered}"
        ))
    })?;

    let mut categories = Vec::with_capacity(NUM_CATEGORIES);
    for id in ids {
        let details = source.category(id).await?;
        let offered = details.clues.len();
        log::trace!("category {} \"{}\" has {} clues", id, details.title, offered);

        let clues = sampler
            .sample(details.clues, NUM_QUESTIONS_PER_CAT)
            .ok_or_else(|| {
                GameError::MalformedResponse(format!(
                    "category {id} has {offered} clues, need {NUM_QUESTIONS_PER_CAT}"
                ))
            })?;
        categories.push(Category::new(
            details.title,
            clues.into_iter().map(Clue::from).collect(),
        ));
    }

    Board::load(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;
    use core::cell::Cell;
    use futures::executor::block_on;
    use jeopardy_protocol::{CategoryDetails, CategoryId, ClueRecord};

    struct FakeSource {
        categories: Vec<CategoryDetails>,
        fail_on_fetch: Option<usize>,
        list_calls: Cell<usize>,
        requested: Cell<usize>,
        fetch_calls: Cell<usize>,
    }

    impl FakeSource {
        fn new(categories: usize, clues: usize) -> Self {
            let categories = (0..categories as CategoryId)
                .map(|id| CategoryDetails {
                    id: id + 10,
                    title: format!("title {id}"),
                    clues_count: Some(clues as u32),
                    clues: (0..clues)
                        .map(|n| ClueRecord::new(format!("q{id}.{n}"), format!("a{id}.{n}")))
                        .collect(),
                })
                .collect();
            Self {
                categories,
                fail_on_fetch: None,
                list_calls: Cell::new(0),
                requested: Cell::new(0),
                fetch_calls: Cell::new(0),
            }
        }

        fn failing_on(mut self, fetch: usize) -> Self {
            self.fail_on_fetch = Some(fetch);
            self
        }
    }

    impl TriviaSource for FakeSource {
        async fn category_ids(&self, count: usize) -> Result<Vec<CategoryId>> {
            self.list_calls.set(self.list_calls.get() + 1);
            self.requested.set(count);
            Ok(self.categories.iter().take(count).map(|c| c.id).collect())
        }

        async fn category(&self, id: CategoryId) -> Result<CategoryDetails> {
            let call = self.fetch_calls.get();
            self.fetch_calls.set(call + 1);
            if self.fail_on_fetch == Some(call) {
                return Err(GameError::NetworkFailure("connection reset".to_string()));
            }
            self.categories
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| GameError::MalformedResponse(format!("unknown category {id}")))
        }
    }

    fn load(source: &FakeSource, seed: u64) -> Result<Board> {
        block_on(load_board(
            source,
            RandomSampler::from_seed(seed),
            LoadConfig::default(),
        ))
    }

    #[test]
    fn exact_source_yields_full_hidden_board() {
        let source = FakeSource::new(NUM_CATEGORIES, NUM_QUESTIONS_PER_CAT);

        let board = load(&source, 3).unwrap();

        assert_eq!(board.categories().len(), NUM_CATEGORIES);
        for category in board.categories() {
            assert_eq!(category.clues().len(), NUM_QUESTIONS_PER_CAT);
            assert!(category.clues().iter().all(|c| c.showing().is_hidden()));
        }
        assert_eq!(source.list_calls.get(), 1);
        assert_eq!(source.requested.get(), DEFAULT_CATEGORY_POOL);
        assert_eq!(source.fetch_calls.get(), NUM_CATEGORIES);
    }

    #[test]
    fn large_pools_are_sampled_down() {
        let source = FakeSource::new(40, 12);

        let board = load(&source, 11).unwrap();

        let mut titles: Vec<_> = board.titles().collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), NUM_CATEGORIES);
        for category in board.categories() {
            let mut questions: Vec<_> = category.clues().iter().map(Clue::question).collect();
            questions.sort();
            questions.dedup();
            assert_eq!(questions.len(), NUM_QUESTIONS_PER_CAT);
        }
        assert_eq!(source.fetch_calls.get(), NUM_CATEGORIES);
    }

    #[test]
    fn failure_on_third_category_discards_everything() {
        let source = FakeSource::new(NUM_CATEGORIES, NUM_QUESTIONS_PER_CAT).failing_on(2);
        let mut controller = GameController::default();

        let load = controller
            .start_game(&source, RandomSampler::from_seed(5))
            .unwrap();
        let result = block_on(load);

        assert_eq!(
            result,
            Err(GameError::NetworkFailure("connection reset".to_string()))
        );
        assert_eq!(source.fetch_calls.get(), 3);

        assert!(controller.finish_load(result).is_err());
        assert_eq!(controller.state(), UiState::Loading);
        assert!(controller.board().is_none());

        controller.abandon_load();
        assert_eq!(controller.state(), UiState::Idle);
    }

    #[test]
    fn short_category_listing_is_malformed() {
        let source = FakeSource::new(NUM_CATEGORIES - 2, NUM_QUESTIONS_PER_CAT);

        let result = load(&source, 1);

        assert!(matches!(result, Err(GameError::MalformedResponse(_))));
        assert_eq!(source.fetch_calls.get(), 0);
    }

    #[test]
    fn short_clue_pool_is_malformed() {
        let source = FakeSource::new(NUM_CATEGORIES, NUM_QUESTIONS_PER_CAT - 1);

        let result = load(&source, 1);

        assert!(matches!(result, Err(GameError::MalformedResponse(_))));
        assert_eq!(source.fetch_calls.get(), 1);
    }

    #[test]
    fn second_start_while_loading_is_ignored() {
        let source = FakeSource::new(NUM_CATEGORIES, NUM_QUESTIONS_PER_CAT);
        let mut controller = GameController::default();

        let first = controller
            .start_game(&source, RandomSampler::from_seed(1))
            .unwrap();
        assert_eq!(controller.state(), UiState::Loading);

        assert!(
            controller
                .start_game(&source, RandomSampler::from_seed(2))
                .is_none()
        );
        assert_eq!(source.list_calls.get(), 0);

        controller.finish_load(block_on(first)).unwrap();
        assert_eq!(source.list_calls.get(), 1);
        assert_eq!(controller.state(), UiState::Ready);
        assert!(controller.board().is_some());
    }

    #[test]
    fn restart_clears_current_board() {
        let source = FakeSource::new(NUM_CATEGORIES, NUM_QUESTIONS_PER_CAT);
        let mut controller = GameController::default();
        let first = controller
            .start_game(&source, RandomSampler::from_seed(1))
            .unwrap();
        controller.finish_load(block_on(first)).unwrap();

        let second = controller.start_game(&source, RandomSampler::from_seed(9));

        assert!(second.is_some());
        assert_eq!(controller.state(), UiState::Loading);
        assert!(controller.board().is_none());
        assert_eq!(
            controller.reveal(CellCoord::new(0, 0).unwrap()),
            Err(GameError::NotReady)
        );
    }

    #[test]
    fn reveal_needs_a_ready_board() {
        let source = FakeSource::new(NUM_CATEGORIES, NUM_QUESTIONS_PER_CAT);
        let mut controller = GameController::default();
        let coords = CellCoord::new(1, 2).unwrap();

        assert_eq!(controller.reveal(coords), Err(GameError::NotReady));

        let load = controller
            .start_game(&source, RandomSampler::from_seed(4))
            .unwrap();
        controller.finish_load(block_on(load)).unwrap();

        let question = controller.board().unwrap()[coords].question().to_string();
        let answer = controller.board().unwrap()[coords].answer().to_string();
        assert_eq!(
            controller.reveal(coords),
            Ok(RevealOutcome::ShowQuestion(question.as_str()))
        );
        assert_eq!(
            controller.reveal(coords),
            Ok(RevealOutcome::ShowAnswer(answer.as_str()))
        );
        assert_eq!(controller.reveal(coords), Ok(RevealOutcome::NoChange));
    }

    #[test]
    fn stale_result_after_abandon_is_discarded() {
        let source = FakeSource::new(NUM_CATEGORIES, NUM_QUESTIONS_PER_CAT);
        let mut controller = GameController::default();
        let load = controller
            .start_game(&source, RandomSampler::from_seed(4))
            .unwrap();

        controller.abandon_load();
        controller.finish_load(block_on(load)).unwrap();

        assert_eq!(controller.state(), UiState::Idle);
        assert!(controller.board().is_none());
    }
}
