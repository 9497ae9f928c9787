//! Todo list card: visible rows, empty-state text, and the footer.

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::todo_card::TodoCard;
use crate::state::todos::TodoAppSignal;

/// The list card.
///
/// Rows are keyed on id plus completion so a toggled row re-renders with its
/// new state.
#[component]
pub fn TodoList() -> impl IntoView {
    let todos = expect_context::<TodoAppSignal>();

    let visible = move || todos.with(|app| app.visible());
    let is_empty = move || todos.with(|app| !app.has_visible());
    let empty_message = move || todos.with(|app| app.empty_message());
    let items_left = move || todos.with(|app| app.items_left_label());

    view! {
        <div class="todo-list">
            <div class="todo-list__rows">
                <For
                    each=visible
                    key=|todo| (todo.id.clone(), todo.is_completed)
                    children=move |todo| view! { <TodoCard todo=todo/> }
                />
                <Show when=is_empty>
                    <p class="todo-list__empty">{empty_message}</p>
                </Show>
            </div>
            <div class="todo-list__footer">
                <p class="todo-list__count">{items_left}</p>
                <FilterBar placement="inline"/>
                <button
                    class="todo-list__clear"
                    on:click=move |_| todos.update(|app| app.clear_completed())
                >
                    "Clear Completed"
                </button>
            </div>
        </div>
    }
}
