//! Page header with the app title and theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Title bar. The button flips light/dark for this session only.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="header">
            <h1 class="header__title">"TODO"</h1>
            <button
                class="btn header__theme-toggle"
                on:click=move |_| {
                    let next = dark_mode::toggle(ui.get_untracked().theme);
                    ui.update(|u| u.theme = next);
                }
                title="Toggle dark mode"
                aria-label=move || if ui.get().is_dark() { "icon-sun" } else { "icon-moon" }
            >
                {move || dark_mode::toggle_glyph(ui.get().theme)}
            </button>
        </header>
    }
}
