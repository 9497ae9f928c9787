//! New-todo form. Pressing Enter submits.

use leptos::prelude::*;

use crate::state::todos::TodoAppSignal;

/// Text input that creates a todo on submit and clears itself on success.
#[component]
pub fn TodoInput() -> impl IntoView {
    let todos = expect_context::<TodoAppSignal>();
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let title = draft.get_untracked();
        let created = todos.try_update(|app| app.submit(&title)).unwrap_or(false);
        if created {
            draft.set(String::new());
        }
    };

    view! {
        <form class="todo-input" on:submit=on_submit>
            <div class="todo-input__check" aria-hidden="true"></div>
            <input
                class="todo-input__field"
                type="text"
                placeholder="Create a new todo..."
                required
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
        </form>
    }
}
