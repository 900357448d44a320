use leptos::prelude::*;

use postbox_client::{Post, PostboxClient};

use crate::components::create_form::CreateForm;
use crate::components::post_list::PostList;
use crate::store::PostStore;

#[component]
pub fn App(initial_posts: Vec<Post>, client: PostboxClient) -> impl IntoView {
    let store = PostStore::new(initial_posts);

    view! {
        <main class="page">
            <section class="container">
                <header class="page-header">
                    <h1>"Postbox"</h1>
                    <p>"Short posts stored in a hosted PostgreSQL database"</p>
                </header>

                <CreateForm store=store.clone() client=client.clone() />
                <PostList store=store client=client />
            </section>
        </main>
    }
}
