use leptos::prelude::*;
use leptos::task::spawn_local;

use postbox_client::PostboxClient;

/// Two-step delete control: the first click only reveals the confirmation
/// popover, and nothing goes over the wire until the user confirms.
#[component]
pub(crate) fn DeleteButton(
    post_id: i64,
    client: PostboxClient,
    on_deleted: Callback<i64>,
    on_error: Callback<String>,
) -> impl IntoView {
    let show_confirm = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let on_confirm = Callback::new({
        let client = client.clone();
        move |()| {
            if deleting.get() {
                return;
            }

            deleting.set(true);
            let client = client.clone();
            spawn_local(async move {
                match client.delete_post(post_id).await {
                    Ok(()) => {
                        deleting.set(false);
                        show_confirm.set(false);
                        // the parent drops this post from the canonical list
                        on_deleted.run(post_id);
                    }
                    Err(err) => {
                        deleting.set(false);
                        show_confirm.set(false);
                        on_error.run(err.to_string());
                    }
                }
            });
        }
    });

    view! {
        <div class="delete-control">
            <button
                class="delete-link"
                disabled=move || deleting.get()
                on:click=move |_| show_confirm.set(true)
            >
                "Delete"
            </button>

            <Show when=move || show_confirm.get()>
                <div class="confirm-popover">
                    <p>"Delete this post?"</p>
                    <div class="confirm-actions">
                        <button
                            class="confirm-yes"
                            disabled=move || deleting.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {move || if deleting.get() { "Deleting..." } else { "Yes" }}
                        </button>
                        <button
                            class="confirm-cancel"
                            disabled=move || deleting.get()
                            on:click=move |_| show_confirm.set(false)
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
