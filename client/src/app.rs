//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use todos::TodoApp;

use crate::pages::todos::TodosPage;
use crate::state::todos::TodoAppSignal;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::local_storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the todo list and UI chrome state as contexts. The saved list and
/// the system color scheme are browser-only, so both are read in an effect
/// after hydration; the server always renders an empty, light page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let todos: TodoAppSignal = RwSignal::new(TodoApp::new(LocalStorage));
    let ui = RwSignal::new(UiState::default());

    provide_context(todos);
    provide_context(ui);

    Effect::new(move || {
        todos.update(|app| app.reload());
        let theme = dark_mode::system_preference();
        dark_mode::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/todo-app.css"/>
        <Title text="Todo"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TodosPage/>
            </Routes>
        </Router>
    }
}
