mod api;
mod controller;
mod error;
#[cfg(feature = "http")]
mod http_client;
mod model;
mod state;
mod view;

pub use api::{DEFAULT_BASE_URL, PostsApi, collection_url, post_url};
pub use controller::{Dialogs, PostClient, run_effect};
pub use error::PostsClientError;
#[cfg(feature = "http")]
pub use http_client::PostsClientHttp;
pub use model::{
    NEW_POST_IMAGE_PLACEHOLDER, NewPost, Post, PostId, PostPatch, THUMBNAIL_PLACEHOLDER,
};
pub use state::{
    CONFIRM_DELETE, CREATE_FAILED, CreateField, CreateForm, DELETE_FAILED, DetailPane, EditField,
    EditForm, Effect, Event, ListPane, Notice, PostSummary, UPDATE_FAILED, UiState,
};
pub use view::{
    DETAIL_LOADING, DetailView, EditFormView, LIST_FAILED, LIST_LOADING, ListView, PageView,
    PostView, RowView,
};
