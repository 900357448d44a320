use leptos::prelude::*;

#[component]
pub(crate) fn SearchBar(on_search: Callback<String>) -> impl IntoView {
    let term = RwSignal::new(String::new());

    view! {
        <input
            class="search-input"
            placeholder="Search posts by title or content..."
            prop:value=move || term.get()
            on:input=move |ev| {
                let value = event_target_value(&ev);
                term.set(value.clone());
                on_search.run(value);
            }
        />
    }
}
