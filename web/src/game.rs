use crate::api::HttpTriviaSource;
use crate::utils::*;
use clap::Args;
use jeopardy_core as game;
use jeopardy_protocol::DEFAULT_API_URL;
use yew::prelude::*;

pub(crate) enum Msg {
    Start,
    Loaded(game::Result<game::Board>),
    Reveal(game::CellCoord),
}

const fn start_label(state: game::UiState) -> &'static str {
    use game::UiState::*;
    match state {
        Idle => "Start!",
        Loading => "Loading...",
        Ready => "Restart!",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    coords: game::CellCoord,
    showing: game::RevealState,
    #[prop_or_default]
    text: AttrValue,
    callback: Callback<game::CellCoord>,
}

impl CellProps {
    fn new(board: &game::Board, coords: game::CellCoord, callback: Callback<game::CellCoord>) -> Self {
        let clue = &board[coords];
        Self {
            coords,
            showing: clue.showing(),
            text: clue
                .displayed_text()
                .map(|text| AttrValue::from(plain_text(text)))
                .unwrap_or_default(),
            callback,
        }
    }
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use game::RevealState::*;

    let CellProps {
        coords,
        showing,
        text,
        callback,
    } = props.clone();

    let class = classes!(
        "clue",
        match showing {
            Hidden => classes!("hidden"),
            Question => classes!("question"),
            Answer => classes!("answer", "disabled"),
        }
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{} clicked", coords);
        callback.emit(coords);
    });

    html! {
        <td {class} {onclick} data-cell={coords.to_string()}>
            if showing.is_hidden() {
                <i class="fas fa-question-circle fa-3x"/>
            } else {
                {text.to_string()}
            }
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api: String,

    /// How many category ids to request before picking a board
    #[arg(long, default_value_t = game::DEFAULT_CATEGORY_POOL)]
    pool: usize,
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::GameController,
    source: HttpTriviaSource,
    seed: u64,
    load_error: Option<game::GameError>,
}

impl GameView {
    fn start(&mut self, ctx: &Context<Self>) -> bool {
        let sampler = game::RandomSampler::from_seed(self.seed);
        let Some(load) = self.controller.start_game(self.source.clone(), sampler) else {
            log::debug!("start ignored, still loading");
            return false;
        };

        log::debug!("loading board with seed {}", self.seed);
        self.seed = js_random_seed();
        self.load_error = None;
        ctx.link()
            .send_future(async move { Msg::Loaded(load.await) });
        true
    }

    fn loaded(&mut self, result: game::Result<game::Board>) -> bool {
        if let Err(err) = self.controller.finish_load(result) {
            log::error!("failed to load board: {}", err);
            self.controller.abandon_load();
            self.load_error = Some(err);
        }
        true
    }

    fn reveal(&mut self, coords: game::CellCoord) -> bool {
        match self.controller.reveal(coords) {
            Ok(outcome) => {
                log::debug!("reveal {}: {:?}", coords, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("ignoring click on {}: {}", coords, err);
                false
            }
        }
    }

    fn view_header(board: Option<&game::Board>) -> Html {
        let Some(board) = board else {
            return html! {};
        };

        html! {
            <tr>
                { for board.titles().map(|title| html! { <th>{title.to_owned()}</th> }) }
            </tr>
        }
    }

    fn view_rows(board: Option<&game::Board>, callback: Callback<game::CellCoord>) -> Html {
        let Some(board) = board else {
            return html! {};
        };

        html! {
            <>
                {
                    for (0..game::NUM_QUESTIONS_PER_CAT).map(|clue| html! {
                        <tr>
                            {
                                for game::CellCoord::row(clue).map(|coords| {
                                    let props = CellProps::new(board, coords, callback.clone());
                                    html! { <CellView ..props/> }
                                })
                            }
                        </tr>
                    })
                }
            </>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props
            .seed
            .as_deref()
            .map_or_else(js_random_seed, seed_from_text);

        Self {
            controller: game::GameController::new(game::LoadConfig::new(props.pool)),
            source: HttpTriviaSource::new(props.api.clone()),
            seed,
            load_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.start(ctx),
            Loaded(result) => self.loaded(result),
            Reveal(coords) => self.reveal(coords),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.controller.state();
        let loading = state.is_loading();
        let board = self.controller.board();

        let cb_start = ctx.link().callback(|_: MouseEvent| Msg::Start);
        let cb_reveal = ctx.link().callback(Msg::Reveal);

        html! {
            <div class="jeopardy">
                <h1>{"Jeopardy!"}</h1>
                <button id="start" class={classes!(loading.then_some("disabled"))} disabled={loading} onclick={cb_start}>
                    {start_label(state)}
                </button>
                if loading {
                    <div id="spin-container">
                        <i class="fas fa-spin fa-spinner fa-3x"/>
                    </div>
                }
                if let Some(err) = &self.load_error {
                    <p class="error">{format!("Could not load a board: {}", err)}</p>
                }
                <table id="jeopardy" class={board.is_some_and(game::Board::is_cleared).then_some("cleared")}>
                    <thead>{Self::view_header(board)}</thead>
                    <tbody>{Self::view_rows(board, cb_reveal)}</tbody>
                </table>
            </div>
        }
    }
}
