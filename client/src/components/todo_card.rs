//! Single row in the todo list.

use leptos::prelude::*;
use todos::Todo;

use crate::state::todos::TodoAppSignal;

/// A todo with its completion toggle, title, and delete button.
#[component]
pub fn TodoCard(todo: Todo) -> impl IntoView {
    let todos = expect_context::<TodoAppSignal>();

    let Todo { id, title, is_completed } = todo;
    let toggle_id = id.clone();
    let delete_id = id;

    let check_class = if is_completed { "todo-card__check todo-card__check--done" } else { "todo-card__check" };
    let title_class = if is_completed { "todo-card__title todo-card__title--done" } else { "todo-card__title" };
    let toggle_title = if is_completed { "Mark as active" } else { "Mark as completed" };

    view! {
        <div class="todo-card">
            <button
                class="todo-card__toggle"
                title=toggle_title
                on:click=move |_| todos.update(|app| app.toggle_completed(&toggle_id))
            >
                <span class=check_class>{is_completed.then_some("✓")}</span>
            </button>
            <p class=title_class>{title}</p>
            <button
                class="todo-card__delete"
                title="Delete"
                aria-label="cross-icon"
                on:click=move |_| todos.update(|app| app.delete(&delete_id))
            >
                "✕"
            </button>
        </div>
    }
}
