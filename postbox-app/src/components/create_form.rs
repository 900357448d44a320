use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use postbox_client::PostboxClient;

use crate::components::toast::{Toast, ToastMessage};
use crate::store::PostStore;
use crate::validate;

#[component]
pub(crate) fn CreateForm(store: PostStore, client: PostboxClient) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let title_error = RwSignal::new(None::<&'static str>);
    let content_error = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);
    let toast = RwSignal::new(None::<ToastMessage>);

    let on_submit = {
        let store = store.clone();
        let client = client.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if submitting.get() {
                return;
            }

            let title_value = title.get();
            let content_value = content.get();

            title_error.set(validate::validate_title(&title_value).err());
            content_error.set(validate::validate_content(&content_value).err());
            if title_error.get().is_some() || content_error.get().is_some() {
                return;
            }

            submitting.set(true);
            let store = store.clone();
            let client = client.clone();
            spawn_local(async move {
                match client.create_post(&title_value, &content_value).await {
                    Ok(created) => {
                        store.add_front(created);
                        title.set(String::new());
                        content.set(String::new());
                        toast.set(Some(ToastMessage::success("Post created successfully!")));
                    }
                    Err(err) => {
                        toast.set(Some(ToastMessage::error(format!("Error: {err}"))));
                    }
                }
                submitting.set(false);
            });
        }
    };

    view! {
        <div class="create-post">
            <Show when=move || toast.get().is_some()>
                <Toast message=toast />
            </Show>

            <form class="card" on:submit=on_submit>
                <div class="field">
                    <div class="field-header">
                        <label>"Title"</label>
                        <span class="char-count">
                            {move || {
                                format!("{}/{}", title.get().chars().count(), validate::TITLE_MAX_CHARS)
                            }}
                        </span>
                    </div>
                    <input
                        placeholder="Post title"
                        maxlength=validate::TITLE_MAX_CHARS.to_string()
                        prop:value=move || title.get()
                        disabled=move || submitting.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            if validate::fits_title(&value) {
                                title.set(value);
                                title_error.set(None);
                            }
                        }
                    />
                    <Show when=move || title_error.get().is_some()>
                        <p class="field-error">{move || title_error.get().unwrap_or_default()}</p>
                    </Show>
                </div>

                <div class="field">
                    <div class="field-header">
                        <label>"Content"</label>
                        <span class="char-count">
                            {move || {
                                format!(
                                    "{}/{}",
                                    content.get().chars().count(),
                                    validate::CONTENT_MAX_CHARS,
                                )
                            }}
                        </span>
                    </div>
                    <textarea
                        placeholder="Post content"
                        maxlength=validate::CONTENT_MAX_CHARS.to_string()
                        prop:value=move || content.get()
                        disabled=move || submitting.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            if validate::fits_content(&value) {
                                content.set(value);
                                content_error.set(None);
                            }
                        }
                    ></textarea>
                    <Show when=move || content_error.get().is_some()>
                        <p class="field-error">{move || content_error.get().unwrap_or_default()}</p>
                    </Show>
                </div>

                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating..." } else { "Create Post" }}
                </button>
            </form>
        </div>
    }
}
