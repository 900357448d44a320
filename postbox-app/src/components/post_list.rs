use leptos::prelude::*;

use postbox_client::{Post, PostboxClient};

use crate::components::delete_button::DeleteButton;
use crate::components::edit_form::EditForm;
use crate::components::search_bar::SearchBar;
use crate::components::sort_dropdown::SortDropdown;
use crate::components::toast::{Toast, ToastMessage};
use crate::query::{self, SortOption};
use crate::store::PostStore;

fn remaining_after_delete(posts: Vec<Post>, deleted_id: i64) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|post| post.id != deleted_id)
        .collect()
}

fn empty_message(term: &str) -> String {
    if term.is_empty() {
        "No posts yet".to_string()
    } else {
        format!("No posts found matching \"{term}\"")
    }
}

fn format_created_at(post: &Post) -> String {
    post.created_at.format("%B %-d, %Y").to_string()
}

/// Search, sort, and per-post edit/delete orchestration.
///
/// The visible list is a throwaway derivation over the canonical store,
/// recomputed from scratch whenever the posts, the search term, or the sort
/// option change. At most one post is in edit mode at a time; starting an
/// edit elsewhere silently takes over.
#[component]
pub(crate) fn PostList(store: PostStore, client: PostboxClient) -> impl IntoView {
    let search_term = RwSignal::new(String::new());
    let sort_by = RwSignal::new(SortOption::Newest);
    let editing_id = RwSignal::new(None::<i64>);
    let toast = RwSignal::new(None::<ToastMessage>);

    let visible = {
        let store = store.clone();
        Memo::new(move |_| {
            query::filter_and_sort(&store.posts.get(), &search_term.get(), sort_by.get())
        })
    };

    let on_search = Callback::new(move |term: String| search_term.set(term));
    let on_sort = Callback::new(move |option: SortOption| sort_by.set(option));

    let on_deleted = Callback::new({
        let store = store.clone();
        move |deleted_id: i64| {
            let remaining = remaining_after_delete(store.posts.get(), deleted_id);
            store.replace_all(remaining);
            if editing_id.get() == Some(deleted_id) {
                editing_id.set(None);
            }
            toast.set(Some(ToastMessage::success("Post deleted successfully!")));
        }
    });

    let on_delete_error = Callback::new(move |message: String| {
        toast.set(Some(ToastMessage::error(format!("Error: {message}"))));
    });

    let on_edit_saved = Callback::new(move |()| {
        editing_id.set(None);
        toast.set(Some(ToastMessage::success("Post updated successfully!")));
    });

    let on_edit_cancel = Callback::new(move |()| editing_id.set(None));

    let store_for_items = store.clone();
    let client_for_items = client.clone();

    view! {
        <div class="post-list">
            <Show when=move || toast.get().is_some()>
                <Toast message=toast />
            </Show>

            <div class="list-controls">
                <div class="list-search">
                    <SearchBar on_search=on_search />
                </div>
                <SortDropdown current=sort_by on_sort=on_sort />
            </div>

            <Show when=move || visible.get().is_empty()>
                <div class="empty-state">
                    <p>{move || empty_message(&search_term.get())}</p>
                </div>
            </Show>

            <div class="post-grid">
                <For
                    each=move || visible.get()
                    key=|post| (post.id, post.title.clone(), post.content.clone())
                    children=move |post| {
                        let store_for_edit = store_for_items.clone();
                        let client_for_delete = client_for_items.clone();
                        let client_for_edit = client_for_items.clone();
                        let post_id = post.id;
                        let post_title = post.title.clone();
                        let post_content = post.content.clone();
                        let created_label = format_created_at(&post);
                        let is_editing = move || editing_id.get() == Some(post_id);

                        view! {
                            <article class="post-card">
                                <Show when=move || !is_editing()>
                                    <div class="post-body">
                                        <div class="post-text">
                                            <h2>{post_title.clone()}</h2>
                                            <p>{post_content.clone()}</p>
                                            <time>{created_label.clone()}</time>
                                        </div>
                                        <div class="post-actions">
                                            <button
                                                class="edit-link"
                                                on:click=move |_| editing_id.set(Some(post_id))
                                            >
                                                "Edit"
                                            </button>
                                            <DeleteButton
                                                post_id=post_id
                                                client=client_for_delete.clone()
                                                on_deleted=on_deleted
                                                on_error=on_delete_error
                                            />
                                        </div>
                                    </div>
                                </Show>
                                <Show when=move || is_editing()>
                                    <EditForm
                                        post=post.clone()
                                        store=store_for_edit.clone()
                                        client=client_for_edit.clone()
                                        on_saved=on_edit_saved
                                        on_cancel=on_edit_cancel
                                    />
                                </Show>
                            </article>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: format!("content of {title}"),
            created_at: Utc
                .timestamp_opt(1_700_000_000 + id, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn delete_removes_exactly_the_confirmed_post() {
        let posts = vec![sample_post(3, "A"), sample_post(7, "B"), sample_post(9, "C")];

        let remaining = remaining_after_delete(posts, 7);

        let ids: Vec<i64> = remaining.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn delete_of_missing_id_changes_nothing() {
        let posts = vec![sample_post(1, "A"), sample_post(2, "B")];

        let remaining = remaining_after_delete(posts.clone(), 42);

        assert_eq!(remaining, posts);
    }

    #[test]
    fn empty_message_mentions_the_search_term() {
        assert_eq!(empty_message(""), "No posts yet");
        assert_eq!(
            empty_message("tomatoes"),
            "No posts found matching \"tomatoes\""
        );
    }

    #[test]
    fn created_at_renders_long_form_date() {
        let post = Post {
            id: 1,
            title: "Hello".to_string(),
            content: "This is long enough.".to_string(),
            created_at: Utc
                .with_ymd_and_hms(2026, 8, 6, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        };

        assert_eq!(format_created_at(&post), "August 6, 2026");
    }
}
