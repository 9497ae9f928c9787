//! The single todo list screen.

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::header::Header;
use crate::components::todo_input::TodoInput;
use crate::components::todo_list::TodoList;

/// Header, input form, list card, and the mobile-only filter bar.
#[component]
pub fn TodosPage() -> impl IntoView {
    view! {
        <main class="todos-page">
            <div class="todos-page__container">
                <Header/>
                <section class="todos-page__body">
                    <TodoInput/>
                    <TodoList/>
                    <FilterBar placement="mobile"/>
                </section>
            </div>
        </main>
    }
}
