use crate::api::PostsApi;
use crate::state::{CONFIRM_DELETE, Effect, Event, UiState};
use crate::view::PageView;
use std::collections::VecDeque;
use tracing::debug;

/// Blocking user prompts.
pub trait Dialogs {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Performs one effect and returns the event describing its outcome.
pub async fn run_effect<A, D>(api: &A, dialogs: &D, effect: Effect) -> Option<Event>
where
    A: PostsApi + ?Sized,
    D: Dialogs + ?Sized,
{
    match effect {
        Effect::FetchList { token } => Some(Event::ListLoaded {
            token,
            result: api.list_posts().await,
        }),
        Effect::FetchPost { id, token } => {
            let result = api.get_post(&id).await;
            Some(Event::PostLoaded { id, token, result })
        }
        Effect::CreatePost(post) => Some(Event::PostCreated(api.create_post(&post).await)),
        Effect::UpdatePost { id, patch } => {
            let result = api.update_post(&id, &patch).await;
            Some(Event::PostUpdated { id, result })
        }
        Effect::DeletePost(id) => {
            let result = api.delete_post(&id).await;
            Some(Event::PostDeleted { id, result })
        }
        Effect::ConfirmDelete(id) => {
            let confirmed = dialogs.confirm(CONFIRM_DELETE);
            Some(Event::DeleteAnswered { id, confirmed })
        }
        Effect::Alert(message) => {
            dialogs.alert(&message);
            None
        }
    }
}

/// Drives a [`UiState`] to quiescence, one request at a time.
pub struct PostClient<A, D> {
    api: A,
    dialogs: D,
    state: UiState,
}

impl<A: PostsApi, D: Dialogs> PostClient<A, D> {
    pub fn new(api: A, dialogs: D) -> Self {
        Self {
            api,
            dialogs,
            state: UiState::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> PageView {
        self.state.view()
    }

    pub async fn start(&mut self) {
        self.dispatch(Event::Started).await;
    }

    /// Applies `event` and every follow-up event its effects produce.
    pub async fn dispatch(&mut self, event: Event) {
        let mut pending = VecDeque::from([event]);

        while let Some(event) = pending.pop_front() {
            for effect in self.state.update(event) {
                debug!(?effect, "running effect");
                if let Some(next) = run_effect(&self.api, &self.dialogs, effect).await {
                    pending.push_back(next);
                }
            }
        }
    }
}
