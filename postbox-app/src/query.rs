//! Derivation of the visible list: free-text filtering plus ordering.
//!
//! The functions here are pure; the list controller recomputes the whole
//! view through them whenever the canonical posts, the search term, or the
//! sort option change.

use postbox_client::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortOption {
    Newest,
    Oldest,
    Title,
}

impl SortOption {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
        }
    }

    /// Parses a dropdown value; unknown values fall back to newest-first.
    pub(crate) fn parse(value: &str) -> Self {
        match value {
            "oldest" => Self::Oldest,
            "title" => Self::Title,
            _ => Self::Newest,
        }
    }
}

/// A post matches when the term is a case-insensitive substring of its title
/// or content. The empty term matches everything.
pub(crate) fn matches_term(post: &Post, term: &str) -> bool {
    let needle = term.to_lowercase();
    post.title.to_lowercase().contains(&needle) || post.content.to_lowercase().contains(&needle)
}

pub(crate) fn sort_posts(posts: &mut [Post], sort_by: SortOption) {
    match sort_by {
        SortOption::Newest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::Oldest => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOption::Title => {
            posts.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }
}

pub(crate) fn filter_and_sort(posts: &[Post], term: &str, sort_by: SortOption) -> Vec<Post> {
    let mut visible: Vec<Post> = posts
        .iter()
        .filter(|post| matches_term(post, term))
        .cloned()
        .collect();
    sort_posts(&mut visible, sort_by);
    visible
}
