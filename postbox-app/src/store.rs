use leptos::prelude::*;

use postbox_client::{Post, PostPatch};

/// Canonical post list for the page, shared by cloning the handle into every
/// component that needs it.
///
/// The store never removes entries on its own: deletion is expressed by the
/// consumer supplying the filtered remainder through [`PostStore::replace_all`].
#[derive(Debug, Clone)]
pub(crate) struct PostStore {
    pub(crate) posts: RwSignal<Vec<Post>>,
}

impl PostStore {
    pub(crate) fn new(initial: Vec<Post>) -> Self {
        Self {
            posts: RwSignal::new(initial),
        }
    }

    pub(crate) fn replace_all(&self, posts: Vec<Post>) {
        self.posts.set(posts);
    }

    /// Prepends a freshly inserted post, keeping the newest-first base order.
    pub(crate) fn add_front(&self, post: Post) {
        self.posts.update(|posts| posts.insert(0, post));
    }

    /// Merges the provided fields into the matching post; other posts and
    /// unset fields stay untouched. Unknown ids are a no-op.
    pub(crate) fn patch(&self, id: i64, patch: PostPatch) {
        self.posts.update(|posts| patch_post(posts, id, &patch));
    }
}

fn patch_post(posts: &mut [Post], id: i64, patch: &PostPatch) {
    let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
        return;
    };

    if let Some(title) = &patch.title {
        post.title = title.clone();
    }
    if let Some(content) = &patch.content {
        post.content = content.clone();
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_post(id: i64, title: &str, content: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc
                .timestamp_opt(1_700_000_000 + id, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn patch_post_merges_only_provided_fields() {
        let mut posts = vec![sample_post(1, "A", "X"), sample_post(2, "B", "Y")];
        let patch = PostPatch {
            title: Some("B2".to_string()),
            content: None,
        };

        patch_post(&mut posts, 2, &patch);

        assert_eq!(posts[1].title, "B2");
        assert_eq!(posts[1].content, "Y");
        assert_eq!(posts[0].title, "A");
    }

    #[test]
    fn patch_post_ignores_unknown_id() {
        let mut posts = vec![sample_post(1, "A", "X")];
        let patch = PostPatch {
            title: Some("new".to_string()),
            content: Some("new content".to_string()),
        };

        patch_post(&mut posts, 999, &patch);

        assert_eq!(posts[0].title, "A");
        assert_eq!(posts[0].content, "X");
    }

    #[test]
    fn patch_post_keeps_creation_timestamp() {
        let mut posts = vec![sample_post(5, "A", "X")];
        let before = posts[0].created_at;
        let patch = PostPatch {
            title: Some("B".to_string()),
            content: Some("Z content".to_string()),
        };

        patch_post(&mut posts, 5, &patch);

        assert_eq!(posts[0].created_at, before);
    }
}
