use crate::error::PostsClientError;
use crate::model::{NewPost, Post, PostId, PostPatch};
use async_trait::async_trait;
use url::Url;

/// Collection endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/posts";

/// REST contract against one `posts` collection.
///
/// `?Send` so the browser client, whose futures are tied to the JS event
/// loop, can implement it too.
#[async_trait(?Send)]
pub trait PostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, PostsClientError>;
    async fn get_post(&self, id: &PostId) -> Result<Post, PostsClientError>;
    async fn create_post(&self, post: &NewPost) -> Result<Post, PostsClientError>;
    async fn update_post(&self, id: &PostId, patch: &PostPatch)
    -> Result<Post, PostsClientError>;
    async fn delete_post(&self, id: &PostId) -> Result<(), PostsClientError>;
}

/// Parses a collection endpoint such as `http://localhost:3000/posts/`.
///
/// Trailing slashes are dropped so `{base}` and `{base}/{id}` never carry an
/// empty segment.
pub fn collection_url(endpoint: &str) -> Result<Url, PostsClientError> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(PostsClientError::InvalidRequest("base url is empty".into()));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| PostsClientError::InvalidRequest(format!("invalid base url `{trimmed}`: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(PostsClientError::InvalidRequest(format!(
            "base url `{trimmed}` cannot carry a path"
        )));
    }
    Ok(url)
}

/// `{collection}/{id}` with `id` percent-encoded as a single path segment.
pub fn post_url(collection: &Url, id: &PostId) -> Url {
    let mut url = collection.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(id.as_str());
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_drops_trailing_slash() {
        let url = collection_url("http://localhost:3000/posts/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/posts");
    }

    #[test]
    fn collection_url_rejects_blank_and_relative_endpoints() {
        for endpoint in ["", "/", "  ", "posts", "mailto:posts@example.com"] {
            assert!(
                matches!(
                    collection_url(endpoint),
                    Err(PostsClientError::InvalidRequest(_))
                ),
                "{endpoint:?} was accepted"
            );
        }
    }

    #[test]
    fn post_url_appends_plain_id() {
        let base = collection_url(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            post_url(&base, &PostId::from(7)).as_str(),
            "http://localhost:3000/posts/7"
        );
    }

    #[test]
    fn post_url_keeps_reserved_characters_inside_one_segment() {
        let base = collection_url(DEFAULT_BASE_URL).unwrap();
        let url = post_url(&base, &PostId::from("a/b?c#d"));

        assert_eq!(url.path(), "/posts/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert_eq!(url.path_segments().map(|s| s.count()), Some(2));
    }

    #[test]
    fn post_url_encodes_spaces_and_percent() {
        let base = collection_url("https://api.example.com/v1/posts").unwrap();
        let url = post_url(&base, &PostId::from("50% off"));
        assert_eq!(url.path(), "/v1/posts/50%25%20off");
    }
}
