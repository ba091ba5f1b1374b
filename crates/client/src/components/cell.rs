use common::board::{Cell as GameCell, Side};
use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub cell: GameCell,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub onclick: Callback<web_sys::MouseEvent>,
}

fn class_of(cell: GameCell) -> &'static str {
    match cell.side() {
        None => "cell empty",
        Some(Side::Human) => "cell human",
        Some(Side::Computer) => "cell computer",
    }
}

#[function_component(Cell)]
pub fn cell(props: &Props) -> Html {
    let Props {
        cell,
        x,
        y,
        size,
        onclick,
    } = props.clone();
    let cx = (x * size + size / 2.).to_string();
    let cy = (y * size + size / 2.).to_string();
    let r = (size * 0.42).to_string();
    html! {
        <circle cx={cx} cy={cy} r={r} class={class_of(cell)} onclick={onclick} />
    }
}
