use leptos::prelude::*;

use crate::query::SortOption;

#[component]
pub(crate) fn SortDropdown(
    current: RwSignal<SortOption>,
    on_sort: Callback<SortOption>,
) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            prop:value=move || current.get().as_str()
            on:change=move |ev| on_sort.run(SortOption::parse(&event_target_value(&ev)))
        >
            <option value="newest">"Newest First"</option>
            <option value="oldest">"Oldest First"</option>
            <option value="title">"By Title"</option>
        </select>
    }
}
