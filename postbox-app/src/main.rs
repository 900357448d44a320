#[cfg(target_arch = "wasm32")]
const REST_URL: &str = match option_env!("POSTBOX_REST_URL") {
    Some(value) => value,
    None => "http://127.0.0.1:3000",
};

#[cfg(target_arch = "wasm32")]
const API_KEY: Option<&str> = option_env!("POSTBOX_API_KEY");

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    wasm_bindgen_futures::spawn_local(bootstrap());
}

/// Fetches the full post list (the service orders it newest-first) and
/// mounts the component tree seeded with it. A failed fetch seeds an empty
/// page rather than blocking the mount.
#[cfg(target_arch = "wasm32")]
async fn bootstrap() {
    use leptos::prelude::*;
    use postbox_app::app::App;
    use postbox_client::PostboxClient;

    let client = PostboxClient::new(REST_URL, API_KEY.map(str::to_string));
    let seed = match client.list_posts().await {
        Ok(posts) => posts,
        Err(err) => {
            leptos::logging::error!("failed to load initial posts: {err}");
            Vec::new()
        }
    };

    leptos::mount::mount_to_body(move || view! { <App initial_posts=seed client=client /> });
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Empty main keeps `cargo build --workspace` on the host working; the
    // app is only ever mounted in the browser.
}
