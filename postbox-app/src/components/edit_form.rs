use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use postbox_client::{Post, PostboxClient, PostPatch};

use crate::components::toast::{Toast, ToastMessage};
use crate::store::PostStore;
use crate::validate;

fn is_dirty(title: &str, content: &str, initial_title: &str, initial_content: &str) -> bool {
    title != initial_title || content != initial_content
}

/// Inline editor for a single post.
///
/// Submitting with unchanged fields is a no-op (the save button is disabled
/// in that state); a successful save patches the store and signals the
/// parent, which closes the editor and owns the success feedback.
#[component]
pub(crate) fn EditForm(
    post: Post,
    store: PostStore,
    client: PostboxClient,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let post_id = post.id;
    let initial_title = post.title.clone();
    let initial_content = post.content.clone();

    let title = RwSignal::new(post.title);
    let content = RwSignal::new(post.content);
    let title_error = RwSignal::new(None::<&'static str>);
    let content_error = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);
    let toast = RwSignal::new(None::<ToastMessage>);

    let on_submit = {
        let store = store.clone();
        let client = client.clone();
        let initial_title = initial_title.clone();
        let initial_content = initial_content.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if submitting.get() {
                return;
            }

            let title_value = title.get();
            let content_value = content.get();
            if !is_dirty(&title_value, &content_value, &initial_title, &initial_content) {
                return;
            }

            title_error.set(validate::validate_title(&title_value).err());
            content_error.set(validate::validate_content(&content_value).err());
            if title_error.get().is_some() || content_error.get().is_some() {
                return;
            }

            submitting.set(true);
            let store = store.clone();
            let client = client.clone();
            spawn_local(async move {
                let patch = PostPatch {
                    title: Some(title_value),
                    content: Some(content_value),
                };
                match client.update_post(post_id, &patch).await {
                    Ok(updated) => {
                        store.patch(
                            post_id,
                            PostPatch {
                                title: Some(updated.title),
                                content: Some(updated.content),
                            },
                        );
                        submitting.set(false);
                        // the parent unmounts this form, so locals are done
                        on_saved.run(());
                    }
                    Err(err) => {
                        toast.set(Some(ToastMessage::error(format!("Error: {err}"))));
                        submitting.set(false);
                    }
                }
            });
        }
    };

    let save_disabled = {
        let initial_title = initial_title.clone();
        let initial_content = initial_content.clone();
        move || {
            submitting.get()
                || !is_dirty(&title.get(), &content.get(), &initial_title, &initial_content)
        }
    };

    view! {
        <div class="edit-post">
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

                <div class="form-actions">
                    <button type="submit" disabled=save_disabled>
                        {move || if submitting.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                    <button
                        type="button"
                        class="secondary"
                        disabled=move || submitting.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_fields_are_clean() {
        assert!(!is_dirty("Title", "Content body", "Title", "Content body"));
    }

    #[test]
    fn either_field_change_marks_dirty() {
        assert!(is_dirty("Title!", "Content body", "Title", "Content body"));
        assert!(is_dirty("Title", "Content body!", "Title", "Content body"));
    }

    #[test]
    fn reverting_both_fields_is_clean_again() {
        let initial_title = "Title";
        let initial_content = "Content body";
        assert!(!is_dirty(
            initial_title,
            initial_content,
            initial_title,
            initial_content
        ));
    }
}
