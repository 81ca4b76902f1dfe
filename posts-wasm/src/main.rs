use crate::client::PostsClientWeb;
use dioxus::prelude::*;
use posts_client::{
    CreateField, DEFAULT_BASE_URL, DetailView, Dialogs, EditField, Event, ListView, PageView,
    UiState, run_effect,
};
use tracing::{error, warn};

mod client;

const BASE_URL: &str = match option_env!("POSTS_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_BASE_URL,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// `window.confirm` / `window.alert`.
struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            warn!(text = message, "could not show alert");
        }
    }
}

/// Applies `event` and spawns one task per resulting effect; each task
/// feeds its completion back in.
fn dispatch(mut state: Signal<UiState>, api: PostsClientWeb, event: Event) {
    let effects = state.write().update(event);

    for effect in effects {
        let api = api.clone();
        spawn(async move {
            if let Some(next) = run_effect(&api, &BrowserDialogs, effect).await {
                dispatch(state, api, next);
            }
        });
    }
}

#[component]
fn App() -> Element {
    let state = use_signal(UiState::default);
    let api = use_hook(|| PostsClientWeb::connect(BASE_URL).map_err(|e| e.to_string()));

    // Runs after the first render, outside the render pass.
    use_future({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match api {
                    Ok(api) => dispatch(state, api, Event::Started),
                    Err(err) => error!(base_url = BASE_URL, error = %err, "invalid posts endpoint"),
                }
            }
        }
    });

    let api = match api {
        Ok(api) => api,
        Err(err) => {
            return rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }
                p { class: "message", "Invalid posts server address {BASE_URL}: {err}" }
            };
        }
    };
    let view = state.read().view();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "page",
            PostList { state, api: api.clone(), view: view.clone() }
            main { class: "detail",
                CreatePostForm { state, api: api.clone(), view: view.clone() }
                PostDetail { state, api: api.clone(), view: view.clone() }
                EditPostForm { state, api, view }
            }
        }
    }
}

#[component]
fn PostList(state: Signal<UiState>, api: PostsClientWeb, view: PageView) -> Element {
    rsx! {
        aside { class: "post-list",
            h1 { "Posts" }
            button {
                id: "add-new-post-btn",
                onclick: {
                    let api = api.clone();
                    move |_| dispatch(state, api.clone(), Event::ToggleCreateForm)
                },
                "Add New Post"
            }
            button {
                onclick: {
                    let api = api.clone();
                    move |_| dispatch(state, api.clone(), Event::Refresh)
                },
                "Refresh"
            }
            ul {
                match view.list {
                    ListView::Message(message) => rsx! { li { class: "message", "{message}" } },
                    ListView::Rows(rows) => rsx! {
                        for row in rows {
                            li {
                                key: "{row.id}",
                                class: if row.selected { "selected" } else { "" },
                                onclick: {
                                    let api = api.clone();
                                    let id = row.id.clone();
                                    move |_| dispatch(state, api.clone(), Event::PostClicked(id.clone()))
                                },
                                img { src: "{row.thumbnail}", alt: "{row.title}" }
                                span { "{row.title}" }
                            }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn PostDetail(state: Signal<UiState>, api: PostsClientWeb, view: PageView) -> Element {
    match view.detail {
        DetailView::Hidden => rsx! {},
        DetailView::Placeholder(message) => rsx! {
            section { id: "post-detail", p { "{message}" } }
        },
        DetailView::Post(post) => {
            let edit_api = api.clone();
            rsx! {
                section { id: "post-detail",
                    h2 { "{post.title}" }
                    p { strong { "Author: " } "{post.author}" }
                    p { class: "content", "{post.content}" }
                    if let Some(image) = post.image {
                        img { class: "cover", src: "{image}", alt: "{post.title}" }
                    }
                    div { class: "actions",
                        button {
                            id: "edit-btn",
                            onclick: move |_| dispatch(state, edit_api.clone(), Event::EditClicked),
                            "Edit"
                        }
                        button {
                            id: "delete-btn",
                            onclick: move |_| dispatch(state, api.clone(), Event::DeleteClicked),
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CreatePostForm(state: Signal<UiState>, api: PostsClientWeb, view: PageView) -> Element {
    let form = view.create_form;
    if !form.visible {
        return rsx! {};
    }

    let field = |field: CreateField| {
        let api = api.clone();
        move |evt: FormEvent| dispatch(state, api.clone(), Event::CreateFieldChanged(field, evt.value()))
    };

    rsx! {
        section { id: "new-post-section",
            h2 { "New Post" }
            form {
                id: "new-post-actual-form",
                onsubmit: {
                    let api = api.clone();
                    move |evt: FormEvent| {
                        evt.prevent_default();
                        dispatch(state, api.clone(), Event::CreateSubmitted);
                    }
                },
                input {
                    r#type: "text",
                    name: "title",
                    placeholder: "Title",
                    value: "{form.title}",
                    oninput: field(CreateField::Title),
                }
                input {
                    r#type: "text",
                    name: "author",
                    placeholder: "Author",
                    value: "{form.author}",
                    oninput: field(CreateField::Author),
                }
                textarea {
                    name: "content",
                    placeholder: "Content",
                    value: "{form.content}",
                    oninput: field(CreateField::Content),
                }
                input {
                    id: "new-post-image",
                    r#type: "url",
                    placeholder: "Image URL (optional)",
                    value: "{form.image}",
                    oninput: field(CreateField::Image),
                }
                button { r#type: "submit", "Create Post" }
            }
        }
    }
}

#[component]
fn EditPostForm(state: Signal<UiState>, api: PostsClientWeb, view: PageView) -> Element {
    let Some(form) = view.edit_form else {
        return rsx! {};
    };
    let cancel_api = api.clone();

    let field = |field: EditField| {
        let api = api.clone();
        move |evt: FormEvent| dispatch(state, api.clone(), Event::EditFieldChanged(field, evt.value()))
    };

    rsx! {
        form {
            id: "edit-post-form",
            onsubmit: {
                let api = api.clone();
                move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch(state, api.clone(), Event::EditSubmitted);
                }
            },
            h2 { "Edit Post" }
            input {
                id: "edit-title",
                r#type: "text",
                value: "{form.title}",
                oninput: field(EditField::Title),
            }
            textarea {
                id: "edit-content",
                value: "{form.content}",
                oninput: field(EditField::Content),
            }
            div { class: "actions",
                button { r#type: "submit", "Save Changes" }
                button {
                    id: "cancel-edit",
                    r#type: "button",
                    onclick: move |_| dispatch(state, cancel_api.clone(), Event::EditCancelled),
                    "Cancel"
                }
            }
        }
    }
}
