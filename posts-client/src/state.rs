use crate::error::PostsClientError;
use crate::model::{NewPost, Post, PostId, PostPatch};
use tracing::{debug, error, info, warn};

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this post?";
pub const CREATE_FAILED: &str = "Failed to add new post.";
pub const UPDATE_FAILED: &str = "Failed to update post.";
pub const DELETE_FAILED: &str = "Failed to delete post.";

/// Static message shown in the detail pane when no post is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SelectPost,
    NoPosts,
    LoadFailed,
    Deleted,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::SelectPost => "Select a post from the left to see its details.",
            Notice::NoPosts => "No posts available. Add a new one!",
            Notice::LoadFailed => "Could not load post details.",
            Notice::Deleted => "Post deleted. Select another post or add a new one.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
    pub thumbnail: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            thumbnail: post.thumbnail().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListPane {
    Loading,
    Loaded(Vec<PostSummary>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailPane {
    Empty(Notice),
    Loading(PostId),
    Viewing(Post),
    Editing(Post),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub visible: bool,
    pub title: String,
    pub author: String,
    pub content: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditForm {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateField {
    Title,
    Author,
    Content,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Content,
}

/// Everything that can happen to the page: user actions and request completions.
#[derive(Debug)]
pub enum Event {
    Started,
    Refresh,
    PostClicked(PostId),
    ToggleCreateForm,
    CreateFieldChanged(CreateField, String),
    CreateSubmitted,
    EditFieldChanged(EditField, String),
    EditClicked,
    EditSubmitted,
    EditCancelled,
    DeleteClicked,
    DeleteAnswered {
        id: PostId,
        confirmed: bool,
    },
    ListLoaded {
        token: u64,
        result: Result<Vec<Post>, PostsClientError>,
    },
    PostLoaded {
        id: PostId,
        token: u64,
        result: Result<Post, PostsClientError>,
    },
    PostCreated(Result<Post, PostsClientError>),
    PostUpdated {
        id: PostId,
        result: Result<Post, PostsClientError>,
    },
    PostDeleted {
        id: PostId,
        result: Result<(), PostsClientError>,
    },
}

/// Work the state machine asks its host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchList { token: u64 },
    FetchPost { id: PostId, token: u64 },
    CreatePost(NewPost),
    UpdatePost { id: PostId, patch: PostPatch },
    DeletePost(PostId),
    ConfirmDelete(PostId),
    Alert(String),
}

/// What a finished list fetch does to the detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListFollowUp {
    SelectFirst,
    KeepDetail,
}

/// The whole page as one value.
///
/// Requests carry a token; a completion whose token is no longer the
/// latest one issued is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    list: ListPane,
    detail: DetailPane,
    create_form: CreateForm,
    edit_form: EditForm,
    selected: Option<PostId>,
    list_token: u64,
    list_follow_up: ListFollowUp,
    detail_token: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            list: ListPane::Loading,
            detail: DetailPane::Empty(Notice::SelectPost),
            create_form: CreateForm::default(),
            edit_form: EditForm::default(),
            selected: None,
            list_token: 0,
            list_follow_up: ListFollowUp::SelectFirst,
            detail_token: 0,
        }
    }
}

impl UiState {
    pub fn list(&self) -> &ListPane {
        &self.list
    }

    pub fn detail(&self) -> &DetailPane {
        &self.detail
    }

    pub fn create_form(&self) -> &CreateForm {
        &self.create_form
    }

    pub fn edit_form(&self) -> &EditForm {
        &self.edit_form
    }

    pub fn selected(&self) -> Option<&PostId> {
        self.selected.as_ref()
    }

    /// The post currently open in the edit form.
    pub fn editing_post_id(&self) -> Option<&PostId> {
        match &self.detail {
            DetailPane::Editing(post) => Some(&post.id),
            _ => None,
        }
    }

    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Started | Event::Refresh => {
                vec![self.reload_list(ListFollowUp::SelectFirst)]
            }
            Event::PostClicked(id) => {
                debug!(%id, "post clicked");
                vec![self.select(id)]
            }
            Event::ToggleCreateForm => {
                self.create_form.visible = !self.create_form.visible;
                Vec::new()
            }
            Event::CreateFieldChanged(field, value) => {
                let slot = match field {
                    CreateField::Title => &mut self.create_form.title,
                    CreateField::Author => &mut self.create_form.author,
                    CreateField::Content => &mut self.create_form.content,
                    CreateField::Image => &mut self.create_form.image,
                };
                *slot = value;
                Vec::new()
            }
            Event::CreateSubmitted => self.submit_create(),
            Event::EditFieldChanged(field, value) => {
                match field {
                    EditField::Title => self.edit_form.title = value,
                    EditField::Content => self.edit_form.content = value,
                }
                Vec::new()
            }
            Event::EditClicked => {
                self.begin_edit();
                Vec::new()
            }
            Event::EditSubmitted => self.submit_edit(),
            Event::EditCancelled => self.cancel_edit(),
            Event::DeleteClicked => match &self.detail {
                DetailPane::Viewing(post) => vec![Effect::ConfirmDelete(post.id.clone())],
                _ => {
                    warn!("delete requested without a post on display");
                    Vec::new()
                }
            },
            Event::DeleteAnswered { id, confirmed } => {
                if confirmed {
                    vec![Effect::DeletePost(id)]
                } else {
                    debug!(%id, "delete declined");
                    Vec::new()
                }
            }
            Event::ListLoaded { token, result } => self.on_list_loaded(token, result),
            Event::PostLoaded { id, token, result } => {
                self.on_post_loaded(id, token, result);
                Vec::new()
            }
            Event::PostCreated(result) => self.on_post_created(result),
            Event::PostUpdated { id, result } => self.on_post_updated(id, result),
            Event::PostDeleted { id, result } => self.on_post_deleted(id, result),
        }
    }

    fn reload_list(&mut self, follow_up: ListFollowUp) -> Effect {
        self.list_token += 1;
        self.list_follow_up = follow_up;
        Effect::FetchList {
            token: self.list_token,
        }
    }

    fn select(&mut self, id: PostId) -> Effect {
        self.selected = Some(id.clone());
        self.detail = DetailPane::Loading(id.clone());
        self.refresh_detail(id)
    }

    /// Re-fetches a post without touching what the pane currently shows.
    fn refresh_detail(&mut self, id: PostId) -> Effect {
        self.invalidate_detail();
        Effect::FetchPost {
            id,
            token: self.detail_token,
        }
    }

    fn invalidate_detail(&mut self) {
        self.detail_token += 1;
    }

    fn on_list_loaded(
        &mut self,
        token: u64,
        result: Result<Vec<Post>, PostsClientError>,
    ) -> Vec<Effect> {
        if token != self.list_token {
            debug!(token, latest = self.list_token, "discarding stale post list");
            return Vec::new();
        }

        let posts = match result {
            Ok(posts) => posts,
            Err(err) => {
                error!(error = %err, "error fetching posts");
                self.list = ListPane::Failed;
                return Vec::new();
            }
        };

        self.list = ListPane::Loaded(posts.iter().map(PostSummary::from).collect());

        let Some(first) = posts.first() else {
            self.selected = None;
            self.invalidate_detail();
            self.detail = DetailPane::Empty(Notice::NoPosts);
            return Vec::new();
        };

        match self.list_follow_up {
            ListFollowUp::KeepDetail => Vec::new(),
            ListFollowUp::SelectFirst => vec![self.select(first.id.clone())],
        }
    }

    fn on_post_loaded(&mut self, id: PostId, token: u64, result: Result<Post, PostsClientError>) {
        if token != self.detail_token {
            debug!(%id, token, latest = self.detail_token, "discarding stale post detail");
            return;
        }

        self.detail = match result {
            Ok(post) => DetailPane::Viewing(post),
            Err(err) => {
                error!(%id, error = %err, "error fetching post");
                DetailPane::Empty(Notice::LoadFailed)
            }
        };
    }

    fn submit_create(&mut self) -> Vec<Effect> {
        let form = &self.create_form;
        let image = Some(form.image.clone());

        match NewPost::new(&*form.title, &*form.author, &*form.content, image) {
            Ok(post) => vec![Effect::CreatePost(post)],
            Err(err) => {
                warn!(error = %err, "rejecting incomplete post");
                vec![Effect::Alert("Title and content are required.".into())]
            }
        }
    }

    fn on_post_created(&mut self, result: Result<Post, PostsClientError>) -> Vec<Effect> {
        let post = match result {
            Ok(post) => post,
            Err(err) => {
                error!(error = %err, "error adding new post");
                return vec![Effect::Alert(CREATE_FAILED.into())];
            }
        };

        info!(id = %post.id, "post created");
        let row = PostSummary::from(&post);
        match &mut self.list {
            ListPane::Loaded(rows) => rows.push(row),
            list => *list = ListPane::Loaded(vec![row]),
        }
        self.create_form = CreateForm::default();

        vec![self.select(post.id)]
    }

    fn begin_edit(&mut self) {
        let DetailPane::Viewing(post) = &self.detail else {
            warn!("edit requested without a post on display");
            return;
        };

        let post = post.clone();
        self.edit_form = EditForm {
            title: post.title.clone(),
            content: post.content.clone(),
        };
        self.invalidate_detail();
        self.detail = DetailPane::Editing(post);
    }

    fn submit_edit(&mut self) -> Vec<Effect> {
        let Some(id) = self.editing_post_id().cloned() else {
            warn!("No post selected for editing.");
            return Vec::new();
        };

        let patch = PostPatch::new(self.edit_form.title.clone(), self.edit_form.content.clone());
        vec![Effect::UpdatePost { id, patch }]
    }

    fn on_post_updated(&mut self, id: PostId, result: Result<Post, PostsClientError>) -> Vec<Effect> {
        let post = match result {
            Ok(post) => post,
            Err(err) => {
                error!(%id, error = %err, "error updating post");
                return vec![Effect::Alert(UPDATE_FAILED.into())];
            }
        };

        info!(%id, "post updated");
        if self.editing_post_id() == Some(&id) {
            self.detail = DetailPane::Viewing(post);
        }
        self.edit_form = EditForm::default();

        vec![self.reload_list(ListFollowUp::SelectFirst)]
    }

    fn cancel_edit(&mut self) -> Vec<Effect> {
        self.edit_form = EditForm::default();

        match &self.detail {
            DetailPane::Editing(post) => {
                let post = post.clone();
                let effect = self.refresh_detail(post.id.clone());
                self.detail = DetailPane::Viewing(post);
                vec![effect]
            }
            _ => {
                self.invalidate_detail();
                self.detail = DetailPane::Empty(Notice::SelectPost);
                Vec::new()
            }
        }
    }

    fn on_post_deleted(&mut self, id: PostId, result: Result<(), PostsClientError>) -> Vec<Effect> {
        if let Err(err) = result {
            error!(%id, error = %err, "error deleting post");
            return vec![Effect::Alert(DELETE_FAILED.into())];
        }

        info!(%id, "post deleted");
        self.selected = None;
        self.edit_form = EditForm::default();
        self.invalidate_detail();
        self.detail = DetailPane::Empty(Notice::Deleted);

        vec![self.reload_list(ListFollowUp::KeepDetail)]
    }
}
