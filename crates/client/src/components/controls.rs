use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: String,
    pub cols: String,
    pub onrows: Callback<String>,
    pub oncols: Callback<String>,
    pub onnewgame: Callback<()>,
}

fn input_value(onchange: &Callback<String>) -> Callback<InputEvent> {
    onchange.reform(|event: InputEvent| {
        let input: HtmlInputElement = event.target_unchecked_into();
        input.value()
    })
}

#[function_component(Controls)]
pub fn controls(props: &Props) -> Html {
    let Props {
        rows,
        cols,
        onrows,
        oncols,
        onnewgame,
    } = props;

    let onclick = onnewgame.reform(|event: web_sys::MouseEvent| event.prevent_default());

    html! {
        <div class="controls">
            <label>
                {"Rows:"}
                <input type="number" min="1" value={rows.clone()} oninput={input_value(onrows)} />
            </label>
            <label>
                {"Columns:"}
                <input type="number" min="1" value={cols.clone()} oninput={input_value(oncols)} />
            </label>
            <button onclick={onclick}>{"New Game"}</button>
        </div>
    }
}
