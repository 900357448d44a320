use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use crate::error::{PostboxClientError, PostboxClientResult};
use crate::models::{Post, PostPatch};

/// `Accept` value asking the service to return a bare object instead of a
/// one-element array for single-row writes.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

const GENERIC_ERROR: &str = "unknown error";

#[derive(Debug, Serialize)]
struct NewPostDto<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBodyDto {
    message: Option<String>,
}

#[derive(Debug, Clone)]
/// HTTP client for the hosted `posts` table.
pub struct PostboxClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl PostboxClient {
    /// Creates a client for the REST surface at `base_url` (for example
    /// `https://project.example.co/rest/v1`), optionally authenticating every
    /// request with the service's anon key.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            client: Client::new(),
        }
    }

    fn posts_endpoint(&self) -> String {
        format!("{}/posts", self.base_url.trim_end_matches('/'))
    }

    fn request(&self, method: Method) -> RequestBuilder {
        let mut request = self.client.request(method, self.posts_endpoint());
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }
        request
    }

    async fn decode_error(response: Response) -> PostboxClientError {
        let status = response.status().as_u16();
        let message = match response.json::<ErrorBodyDto>().await {
            Ok(body) => body.message.unwrap_or_else(|| GENERIC_ERROR.to_string()),
            Err(_) => GENERIC_ERROR.to_string(),
        };
        PostboxClientError::Api { status, message }
    }

    async fn expect_success(response: Response) -> PostboxClientResult<Response> {
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }
        Ok(response)
    }

    /// Fetches every post, newest first.
    pub async fn list_posts(&self) -> PostboxClientResult<Vec<Post>> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let response = Self::expect_success(response).await?;

        Ok(response.json::<Vec<Post>>().await?)
    }

    /// Inserts a post and returns the stored row with its assigned id and
    /// creation timestamp.
    pub async fn create_post(&self, title: &str, content: &str) -> PostboxClientResult<Post> {
        let payload = NewPostDto { title, content };
        let response = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT)
            .json(&payload)
            .send()
            .await?;
        let response = Self::expect_success(response).await?;

        Ok(response.json::<Post>().await?)
    }

    /// Applies `patch` to the post with `id` and returns the updated row.
    pub async fn update_post(&self, id: i64, patch: &PostPatch) -> PostboxClientResult<Post> {
        let response = self
            .request(Method::PATCH)
            .query(&[("id", id_filter(id))])
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT)
            .json(patch)
            .send()
            .await?;
        let response = Self::expect_success(response).await?;

        Ok(response.json::<Post>().await?)
    }

    /// Deletes the post with `id`.
    pub async fn delete_post(&self, id: i64) -> PostboxClientResult<()> {
        let response = self
            .request(Method::DELETE)
            .query(&[("id", id_filter(id))])
            .send()
            .await?;
        Self::expect_success(response).await?;

        Ok(())
    }
}

fn id_filter(id: i64) -> String {
    format!("eq.{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_endpoint_normalizes_trailing_slash() {
        let client = PostboxClient::new("http://localhost:3000/", None);
        assert_eq!(client.posts_endpoint(), "http://localhost:3000/posts");
    }

    #[test]
    fn id_filter_builds_eq_operator() {
        assert_eq!(id_filter(7), "eq.7");
    }

    #[test]
    fn post_patch_omits_missing_fields() {
        let patch = PostPatch {
            title: Some("New title".to_string()),
            content: None,
        };

        let body = serde_json::to_string(&patch).expect("patch must serialize");
        assert_eq!(body, r#"{"title":"New title"}"#);
    }

    #[test]
    fn api_error_displays_server_message() {
        let err = PostboxClientError::Api {
            status: 400,
            message: "duplicate key value".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate key value");
    }

    #[test]
    fn post_deserializes_wire_row() {
        let raw = r#"{"id":1,"title":"Hello","content":"This is long enough.","created_at":"2026-08-06T12:00:00+00:00"}"#;

        let post: Post = serde_json::from_str(raw).expect("row must deserialize");
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "This is long enough.");
    }

    #[test]
    fn error_body_tolerates_absent_message() {
        let body: ErrorBodyDto =
            serde_json::from_str(r#"{"code":"PGRST116"}"#).expect("body must deserialize");
        assert!(body.message.is_none());
    }
}
