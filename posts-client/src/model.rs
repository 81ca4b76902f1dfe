use crate::error::PostsClientError;
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

/// Image sent on create when the form leaves the image field blank.
pub const NEW_POST_IMAGE_PLACEHOLDER: &str =
    "https://via.placeholder.com/150/CCCCCC/FFFFFF?text=New+Post";

/// Thumbnail shown in the post list for posts without an image.
pub const THUMBNAIL_PLACEHOLDER: &str = "https://via.placeholder.com/50/CCCCCC/FFFFFF?text=No+Img";

/// Server-assigned post identifier.
///
/// The backend is free to use numbers or strings; both decode to the same
/// textual form and are echoed back verbatim in request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::str::FromStr for PostId {
    type Err = PostsClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() {
            return Err(PostsClientError::InvalidRequest("post id is empty".into()));
        }
        Ok(Self::new(id))
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => PostId(id),
            RawId::Number(id) => PostId(id.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("Post {{ id: {}, title: {}, author: {} }}", id, title, author)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Post {
    /// The post's image, treating an empty string as absent.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn thumbnail(&self) -> &str {
        self.image().unwrap_or(THUMBNAIL_PLACEHOLDER)
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    pub content: String,
    pub image: String,
}

impl NewPost {
    /// Validates the fields and substitutes the placeholder for a blank image.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        image: Option<String>,
    ) -> Result<Self, PostsClientError> {
        let title = title.into();
        let content = content.into();

        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(PostsClientError::InvalidRequest(
                "title and content are required".into(),
            ));
        }

        let image = image
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| NEW_POST_IMAGE_PLACEHOLDER.to_string());

        Ok(Self {
            title,
            author: author.into(),
            content,
            image,
        })
    }
}

/// Body of `PATCH /posts/{id}`; absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PostPatch {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_text_ids_decode_alike() {
        let numeric: Post = serde_json::from_value(json!({"id": 7, "title": "A"})).unwrap();
        let text: Post = serde_json::from_value(json!({"id": "7", "title": "A"})).unwrap();

        assert_eq!(numeric.id, text.id);
        assert_eq!(numeric.id.as_str(), "7");
        assert_eq!(numeric.author, "");
    }

    #[test]
    fn empty_image_counts_as_missing() {
        let post: Post =
            serde_json::from_value(json!({"id": 1, "title": "A", "image": ""})).unwrap();

        assert_eq!(post.image(), None);
        assert_eq!(post.thumbnail(), THUMBNAIL_PLACEHOLDER);
    }

    #[test]
    fn blank_image_gets_placeholder() {
        let post = NewPost::new("Title", "Ann", "Body", Some("  ".into())).unwrap();
        assert_eq!(post.image, NEW_POST_IMAGE_PLACEHOLDER);

        let post = NewPost::new("Title", "Ann", "Body", None).unwrap();
        assert_eq!(post.image, NEW_POST_IMAGE_PLACEHOLDER);

        let post = NewPost::new("Title", "Ann", "Body", Some("http://img/a.png".into())).unwrap();
        assert_eq!(post.image, "http://img/a.png");
    }

    #[test]
    fn new_post_requires_title_and_content() {
        let err = NewPost::new(" ", "Ann", "Body", None).unwrap_err();
        assert!(matches!(err, PostsClientError::InvalidRequest(_)));

        let err = NewPost::new("Title", "Ann", "", None).unwrap_err();
        assert!(matches!(err, PostsClientError::InvalidRequest(_)));
    }

    #[test]
    fn patch_omits_missing_fields() {
        let patch = PostPatch {
            title: Some("B2".into()),
            content: None,
        };

        assert_eq!(serde_json::to_value(&patch).unwrap(), json!({"title": "B2"}));
        assert!(PostPatch::default().is_empty());
    }
}
