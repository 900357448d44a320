use postbox_client::{PostPatch, PostboxClient};

fn client_from_env() -> PostboxClient {
    let base_url =
        std::env::var("POSTBOX_REST_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let api_key = std::env::var("POSTBOX_API_KEY").ok();
    PostboxClient::new(base_url, api_key)
}

#[tokio::test]
#[ignore = "requires a running PostgREST-style service with a posts table"]
async fn crud_smoke_flow() {
    let client = client_from_env();

    let created = client
        .create_post("smoke title", "smoke content long enough")
        .await
        .expect("create_post must succeed");
    assert_eq!(created.title, "smoke title");
    assert_eq!(created.content, "smoke content long enough");

    let listed = client.list_posts().await.expect("list_posts must succeed");
    assert!(listed.iter().any(|post| post.id == created.id));
    for pair in listed.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }

    let patch = PostPatch {
        title: Some("smoke title updated".to_string()),
        content: None,
    };
    let updated = client
        .update_post(created.id, &patch)
        .await
        .expect("update_post must succeed");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "smoke title updated");
    assert_eq!(updated.content, "smoke content long enough");

    client
        .delete_post(created.id)
        .await
        .expect("delete_post must succeed");

    let after_delete = client.list_posts().await.expect("list_posts must succeed");
    assert!(after_delete.iter().all(|post| post.id != created.id));
}
