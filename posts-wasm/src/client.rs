use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use posts_client::{
    NewPost, Post, PostId, PostPatch, PostsApi, PostsClientError, collection_url, post_url,
};
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Clone, PartialEq)]
pub struct PostsClientWeb {
    base_url: Url,
}

impl PostsClientWeb {
    pub fn connect(endpoint: &str) -> Result<Self, PostsClientError> {
        Ok(Self {
            base_url: collection_url(endpoint)?,
        })
    }

    fn item_url(&self, id: &PostId) -> Url {
        post_url(&self.base_url, id)
    }

    async fn send(request: Request) -> Result<Response, PostsClientError> {
        let response = request.send().await.map_err(transport)?;

        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(PostsClientError::from_status(status, text))
        }
    }

    async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, PostsClientError> {
        Self::send(request)
            .await?
            .json()
            .await
            .map_err(|e| PostsClientError::Decode(e.to_string()))
    }

    fn accept_json(builder: RequestBuilder) -> RequestBuilder {
        builder.header("Accept", "application/json")
    }
}

fn transport(err: gloo_net::Error) -> PostsClientError {
    PostsClientError::Transport(err.to_string())
}

#[async_trait(?Send)]
impl PostsApi for PostsClientWeb {
    async fn list_posts(&self) -> Result<Vec<Post>, PostsClientError> {
        let request = Self::accept_json(Request::get(self.base_url.as_str()))
            .build()
            .map_err(transport)?;
        Self::send_json(request).await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostsClientError> {
        let request = Self::accept_json(Request::get(self.item_url(id).as_str()))
            .build()
            .map_err(transport)?;
        Self::send_json(request).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, PostsClientError> {
        let request = Self::accept_json(Request::post(self.base_url.as_str()))
            .json(post)
            .map_err(transport)?;
        Self::send_json(request).await
    }

    async fn update_post(&self, id: &PostId, patch: &PostPatch) -> Result<Post, PostsClientError> {
        let request = Self::accept_json(Request::patch(self.item_url(id).as_str()))
            .json(patch)
            .map_err(transport)?;
        Self::send_json(request).await
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), PostsClientError> {
        let request = Request::delete(self.item_url(id).as_str())
            .build()
            .map_err(transport)?;
        Self::send(request).await?;
        Ok(())
    }
}
