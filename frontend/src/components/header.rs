use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <h1>{"Mon application de camping"}</h1>
        </header>
    }
}
