use crate::api::{PostsApi, collection_url, post_url};
use crate::error::PostsClientError;
use crate::model::{NewPost, Post, PostId, PostPatch};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument};
use url::Url;

#[derive(Clone)]
pub struct PostsClientHttp {
    client: Arc<Client>,
    base_url: Url,
}

impl PostsClientHttp {
    /// `endpoint` is the collection URL, e.g. `http://localhost:3000/posts`.
    pub fn connect(endpoint: &str) -> Result<Self, PostsClientError> {
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            base_url: collection_url(endpoint)?,
        })
    }

    fn item_url(&self, id: &PostId) -> Url {
        post_url(&self.base_url, id)
    }

    async fn send(request: RequestBuilder) -> Result<reqwest::Response, PostsClientError> {
        let resp = request
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            Err(PostsClientError::from_status(status, message))
        }
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, PostsClientError> {
        let body = Self::send(request).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| PostsClientError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl PostsApi for PostsClientHttp {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn list_posts(&self) -> Result<Vec<Post>, PostsClientError> {
        let posts: Vec<Post> = Self::send_json(self.client.get(self.base_url.clone())).await?;
        debug!(count = posts.len(), "fetched posts");
        Ok(posts)
    }

    #[instrument(skip(self))]
    async fn get_post(&self, id: &PostId) -> Result<Post, PostsClientError> {
        Self::send_json(self.client.get(self.item_url(id))).await
    }

    #[instrument(skip(self, post), fields(title = %post.title))]
    async fn create_post(&self, post: &NewPost) -> Result<Post, PostsClientError> {
        Self::send_json(self.client.post(self.base_url.clone()).json(post)).await
    }

    #[instrument(skip(self, patch))]
    async fn update_post(
        &self,
        id: &PostId,
        patch: &PostPatch,
    ) -> Result<Post, PostsClientError> {
        Self::send_json(self.client.patch(self.item_url(id)).json(patch)).await
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, id: &PostId) -> Result<(), PostsClientError> {
        Self::send(self.client.delete(self.item_url(id))).await?;
        Ok(())
    }
}
