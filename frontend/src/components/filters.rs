use shared::Month;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::Logger;

#[derive(Properties, PartialEq)]
pub struct FiltersProps {
    pub month: Month,
    pub search: String,
    pub on_month_change: Callback<Month>,
    pub on_search_input: Callback<String>,
    pub on_search: Callback<()>,
}

/// Month dropdown, search box and Search button
#[function_component(Filters)]
pub fn filters(props: &FiltersProps) -> Html {
    let on_month_change = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Month>() {
                Ok(month) => on_month_change.emit(month),
                Err(err) => Logger::warn_with_component("Filters", &err.to_string()),
            }
        })
    };

    let on_search_input = {
        let on_search_input = props.on_search_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search_input.emit(input.value());
        })
    };

    let on_search_click = {
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit(()))
    };

    html! {
        <div class="filters">
            <select onchange={on_month_change}>
                {for Month::ALL.iter().map(|month| html! {
                    <option key={month.name()} value={month.name()} selected={*month == props.month}>
                        {month.name()}
                    </option>
                })}
            </select>

            <input
                type="text"
                placeholder="Search by title, description, or price"
                value={props.search.clone()}
                oninput={on_search_input}
            />
            <button onclick={on_search_click}>{"Search"}</button>
        </div>
    }
}
