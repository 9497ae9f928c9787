//! All / Active / Completed filter buttons.

use leptos::prelude::*;
use todos::Filter;

use crate::state::todos::TodoAppSignal;

/// Filter selector. Rendered inline in the list footer and again as a
/// standalone bar on narrow screens; `placement` picks the modifier class.
#[component]
pub fn FilterBar(placement: &'static str) -> impl IntoView {
    let todos = expect_context::<TodoAppSignal>();
    let bar_class = format!("filter-bar filter-bar--{placement}");

    view! {
        <div class=bar_class>
            {Filter::VARIANTS
                .into_iter()
                .map(|mode| {
                    let button_class = move || {
                        if todos.with(|app| app.filter()) == mode {
                            "filter-bar__button filter-bar__button--active"
                        } else {
                            "filter-bar__button"
                        }
                    };
                    view! {
                        <button
                            class=button_class
                            on:click=move |_| todos.update(|app| app.set_filter(mode))
                        >
                            {mode.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
