use super::board::Board;
use super::controls::Controls;
use crate::api::GameApi;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::game::{BoardAction, BoardView, MoveGate, Phase};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Room kept free around the board for the title and the form.
const MARGIN_X: f64 = 20.;
const MARGIN_Y: f64 = 220.;

fn fit_with_aspect_ratio(
    width: f64,
    height: f64,
    aspect_width: f64,
    aspect_height: f64,
) -> (f64, f64) {
    if width * aspect_height > height * aspect_width {
        (height * aspect_width / aspect_height, height)
    } else {
        (width, width * aspect_height / aspect_width)
    }
}

fn cell_size_for(window_width: f64, window_height: f64, rows: usize, cols: usize) -> f64 {
    if rows == 0 || cols == 0 {
        return 0.;
    }
    let (resized_width, _) = fit_with_aspect_ratio(
        (window_width - MARGIN_X).max(0.),
        (window_height - MARGIN_Y).max(0.),
        cols as f64,
        rows as f64,
    );
    resized_width / cols as f64
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: Rc<ClientConfig>,
}

#[function_component(App)]
pub fn app(props: &Props) -> Html {
    let config = props.config.clone();
    let api = use_ref(|| GameApi::new(&config));
    let view = use_reducer(|| BoardView::new(config.default_rows, config.default_cols));
    let gate = use_mut_ref(MoveGate::default);

    let cloned_view = view.clone();
    let seq = view.notice_seq;
    use_effect_with_deps(
        move |seq| {
            if let Some(notice) = &cloned_view.notice {
                let window = web_sys::window().unwrap();
                if let Err(err) = window.alert_with_message(&notice.message()) {
                    log::warn!("could not show notice: {err:?}");
                }
                cloned_view.dispatch(BoardAction::NoticeShown(*seq));
            }
            || ()
        },
        seq,
    );

    let cloned_view = view.clone();
    let cloned_api = api.clone();
    let onnewgame = Callback::from(move |()| {
        let request = match cloned_view.new_game_request() {
            Ok(request) => request,
            Err(err) => {
                log::warn!("not starting a game: {err}");
                cloned_view.dispatch(BoardAction::Failed(err.to_string()));
                return;
            }
        };
        let view = cloned_view.clone();
        let api = cloned_api.clone();
        spawn_local(async move {
            match api.new_game(request).await {
                Ok(response) => view.dispatch(BoardAction::Started(response)),
                Err(err) => {
                    log::error!("error starting game: {err}");
                    view.dispatch(BoardAction::Failed(format!("Could not start a game: {err}")));
                }
            }
        });
    });

    let cloned_view = view.clone();
    let cloned_api = api.clone();
    let onselect = Callback::from(move |col: usize| {
        let game_id = match cloned_view.move_target(col) {
            Some(game_id) if gate.borrow().allows(&game_id) => game_id,
            _ => return,
        };
        let view = cloned_view.clone();
        let api = cloned_api.clone();
        let gate = gate.clone();
        spawn_local(async move {
            let reply = api
                .play(&game_id, col)
                .await
                .and_then(|response| response.into_reply().map_err(ClientError::from));
            match reply {
                Ok(reply) => {
                    gate.borrow_mut().record(&game_id, &reply);
                    view.dispatch(BoardAction::Played { game_id, reply });
                }
                Err(err) => {
                    log::error!("error playing move in game {game_id}: {err}");
                    view.dispatch(BoardAction::Failed(format!("Could not play that move: {err}")));
                }
            }
        });
    });

    let cloned_view = view.clone();
    let onrows = Callback::from(move |value| cloned_view.dispatch(BoardAction::SetRows(value)));
    let cloned_view = view.clone();
    let oncols = Callback::from(move |value| cloned_view.dispatch(BoardAction::SetCols(value)));

    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    let height = window.inner_height().unwrap().as_f64().unwrap();
    let cell_size = cell_size_for(width, height, view.board.rows(), view.board.cols());

    html! {
        <div class="app">
            <h1>{"Connect 4"}</h1>
            <Board board={view.board.clone()} cell_size={cell_size} onselect={onselect} />
            <Controls
                rows={view.rows_input.clone()}
                cols={view.cols_input.clone()}
                onrows={onrows}
                oncols={oncols}
                onnewgame={onnewgame} />
            if view.phase == Phase::InProgress {
                <p class="turn">{format!("Turn: {}", view.turn)}</p>
            }
            {
                match view.winner() {
                    Some(winner) => html! { <h2>{format!("Winner: Player {}", winner.code())}</h2> },
                    None => html! {},
                }
            }
            {for view.status.iter().map(|status| html! { <p class="status">{status.clone()}</p> })}
        </div>
    }
}
