use std::rc::Rc;

use bingo_core as bingo;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::utils::window;
use yew::prelude::*;

use crate::{route, utils};

/// How long the celebrate class stays on the board.
const CELEBRATION_MS: u32 = 2_500;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Toggle(usize),
    NewBoard,
    Reset,
    Navigated,
    CelebrationDone,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: usize,
    phrase: bingo::Phrase,
    marked: bool,
    #[prop_or_default]
    on_line: bool,
    callback: Callback<usize>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        index,
        phrase,
        marked,
        on_line,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        marked.then_some("active"),
        on_line.then_some("line")
    );
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick}>{phrase.as_str()}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub pool: Rc<bingo::PhrasePool>,
    pub session: bingo::Session,
}

pub(crate) struct BoardView {
    session: bingo::Session,
    celebration: Option<Timeout>,
    _popstate: EventListener,
}

impl BoardView {
    fn celebrate(&mut self, ctx: &Context<Self>) {
        log::info!("bingo! {} lines", self.session.line_count());
        let link = ctx.link().clone();
        self.celebration = Some(Timeout::new(CELEBRATION_MS, move || {
            link.send_message(Msg::CelebrationDone)
        }));
    }

    fn switch_seed(&mut self, ctx: &Context<Self>, seed: &str, token: Option<&str>) -> bool {
        match bingo::Session::new(&ctx.props().pool, seed, token) {
            Ok(session) => {
                self.session = session;
                self.celebration = None;
                true
            }
            Err(err) => {
                log::error!("cannot build board for seed {:?}: {}", seed, err);
                false
            }
        }
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let popstate = EventListener::new(&window(), "popstate", move |_| {
            link.send_message(Msg::Navigated)
        });

        Self {
            session: ctx.props().session.clone(),
            celebration: None,
            _popstate: popstate,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Toggle(index) => match self.session.toggle(index) {
                Ok(outcome) => {
                    route::replace(&self.session.share_path());
                    if outcome.is_new_completion() {
                        self.celebrate(ctx);
                    }
                    true
                }
                Err(err) => {
                    log::error!("toggle rejected: {}", err);
                    false
                }
            },
            NewBoard => {
                let seed = utils::random_seed();
                log::debug!("new board: {}", seed);
                let updated = self.switch_seed(ctx, &seed, None);
                if updated {
                    route::push(&self.session.board_path());
                }
                updated
            }
            Reset => {
                self.session.reset();
                self.celebration = None;
                route::push(&self.session.board_path());
                true
            }
            Navigated => {
                let location = route::Location::current();
                let Some(seed) = location.seed else {
                    return false;
                };
                let token = location.token.as_deref();
                if seed == self.session.seed() && bingo::decode(token) == self.session.state() {
                    return false;
                }
                log::debug!("navigated to {:?} {:?}", seed, token);
                self.switch_seed(ctx, &seed, token)
            }
            CelebrationDone => self.celebration.take().is_some(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_new_board = ctx.link().callback(|_: MouseEvent| NewBoard);
        let cb_reset = ctx.link().callback(|_: MouseEvent| Reset);
        let callback = ctx.link().callback(Toggle);
        let lines = self.session.completed_lines();
        let board_class = classes!("board", self.celebration.is_some().then_some("celebrate"));

        html! {
            <main class="bingo">
                <nav>
                    <button onclick={cb_new_board}>{"Nieuwe kaart"}</button>
                    <button onclick={cb_reset}>{"Reset"}</button>
                </nav>
                <p class="banner">
                    { if self.session.has_bingo() { "🎉 BINGO! 🎉" } else { "\u{a0}" } }
                </p>
                <div class={board_class}>
                    {
                        for self.session.board().iter().enumerate().map(|(index, phrase)| {
                            let marked = self.session.is_marked(index);
                            let on_line = lines.covers(index);
                            html! {
                                <CellView
                                    {index}
                                    phrase={phrase.clone()}
                                    {marked}
                                    {on_line}
                                    callback={callback.clone()}
                                />
                            }
                        })
                    }
                </div>
            </main>
        }
    }
}
