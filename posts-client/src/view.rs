//! Render-ready snapshot of [`UiState`].
//!
//! Frontends draw only from these types, so the markup never sees raw
//! request results and rendering can be checked without a DOM.

use crate::model::PostId;
use crate::state::{CreateForm, DetailPane, EditForm, ListPane, UiState};
use std::fmt;

pub const LIST_LOADING: &str = "Loading posts...";
pub const LIST_FAILED: &str = "Failed to load posts. Is the posts server running?";
pub const DETAIL_LOADING: &str = "Loading...";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub list: ListView,
    pub detail: DetailView,
    pub create_form: CreateForm,
    pub edit_form: Option<EditFormView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Message(&'static str),
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: PostId,
    pub title: String,
    pub thumbnail: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Placeholder(&'static str),
    Post(PostView),
    /// The edit form occupies the pane.
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub content: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditFormView {
    pub post_id: PostId,
    pub title: String,
    pub content: String,
}

impl UiState {
    pub fn view(&self) -> PageView {
        let list = match self.list() {
            ListPane::Loading => ListView::Message(LIST_LOADING),
            ListPane::Failed => ListView::Message(LIST_FAILED),
            ListPane::Loaded(rows) => ListView::Rows(
                rows.iter()
                    .map(|row| RowView {
                        id: row.id.clone(),
                        title: row.title.clone(),
                        thumbnail: row.thumbnail.clone(),
                        selected: self.selected() == Some(&row.id),
                    })
                    .collect(),
            ),
        };

        let (detail, edit_form) = match self.detail() {
            DetailPane::Empty(notice) => (DetailView::Placeholder(notice.message()), None),
            DetailPane::Loading(_) => (DetailView::Placeholder(DETAIL_LOADING), None),
            DetailPane::Viewing(post) => (
                DetailView::Post(PostView {
                    id: post.id.clone(),
                    title: post.title.clone(),
                    author: post.author.clone(),
                    content: post.content.clone(),
                    image: post.image().map(str::to_string),
                }),
                None,
            ),
            DetailPane::Editing(post) => {
                let EditForm { title, content } = self.edit_form().clone();
                (
                    DetailView::Hidden,
                    Some(EditFormView {
                        post_id: post.id.clone(),
                        title,
                        content,
                    }),
                )
            }
        };

        PageView {
            list,
            detail,
            create_form: self.create_form().clone(),
            edit_form,
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Posts")?;
        match &self.list {
            ListView::Message(message) => writeln!(f, "  {message}")?,
            ListView::Rows(rows) => {
                for row in rows {
                    let marker = if row.selected { '>' } else { ' ' };
                    writeln!(f, "{marker} [{}] {}", row.id, row.title)?;
                }
            }
        }

        writeln!(f)?;
        match (&self.detail, &self.edit_form) {
            (DetailView::Placeholder(message), _) => writeln!(f, "{message}")?,
            (DetailView::Post(post), _) => {
                writeln!(f, "{}", post.title)?;
                writeln!(f, "Author: {}", post.author)?;
                if let Some(image) = &post.image {
                    writeln!(f, "Image: {image}")?;
                }
                writeln!(f)?;
                writeln!(f, "{}", post.content)?;
            }
            (DetailView::Hidden, Some(form)) => {
                writeln!(f, "Editing [{}]", form.post_id)?;
                writeln!(f, "Title: {}", form.title)?;
                writeln!(f, "Content: {}", form.content)?;
            }
            (DetailView::Hidden, None) => {}
        }

        Ok(())
    }
}
