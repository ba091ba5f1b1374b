use super::cell::Cell;
use common::board::Board as GameBoard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub board: GameBoard,
    pub cell_size: f64,
    /// Called with the column of the clicked cell.
    pub onselect: Callback<usize>,
}

#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let Props {
        board,
        cell_size,
        onselect,
    } = props;
    let cell_size = *cell_size;
    let width = (board.cols() as f64 * cell_size).to_string();
    let height = (board.rows() as f64 * cell_size).to_string();

    let cells = board.iter_rows().enumerate().flat_map(|(y, row)| {
        row.iter().enumerate().map(move |(x, &cell)| {
            let onclick = onselect.reform(move |_: web_sys::MouseEvent| x);
            html! {
                <Cell cell={cell} x={x as f64} y={y as f64} size={cell_size} onclick={onclick} />
            }
        })
    });

    html! {
        <svg class="board" width={width.clone()} height={height.clone()}>
            <rect x="0" y="0" width={width} height={height} class="frame" />
            {for cells}
        </svg>
    }
}
