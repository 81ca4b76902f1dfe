use httpmock::MockServer;
use posts_client::{
    NEW_POST_IMAGE_PLACEHOLDER, NewPost, PostId, PostPatch, PostsApi, PostsClientError,
    PostsClientHttp,
};
use serde_json::json;

fn client(server: &MockServer) -> PostsClientHttp {
    PostsClientHttp::connect(&format!("{}/posts/", server.base_url())).expect("client")
}

#[tokio::test]
async fn list_posts_hits_collection() -> Result<(), PostsClientError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET")
            .path("/posts")
            .header("accept", "application/json");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":1,"title":"A","author":"Ann","content":"a"},{"id":"2","title":"B","author":"Bo","content":"b","image":"http://img/b.png"}]"#);
    });

    let posts = client(&server).list_posts().await?;

    mock.assert();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, PostId::from(1));
    assert_eq!(posts[0].image(), None);
    assert_eq!(posts[1].id.as_str(), "2");
    assert_eq!(posts[1].image(), Some("http://img/b.png"));
    Ok(())
}

#[tokio::test]
async fn get_post_hits_item_path() -> Result<(), PostsClientError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/posts/7");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":7,"title":"G","author":"Gil","content":"g"}"#);
    });

    let post = client(&server).get_post(&PostId::from(7)).await?;

    mock.assert();
    assert_eq!(post.title, "G");
    assert_eq!(post.author, "Gil");
    Ok(())
}

#[tokio::test]
async fn create_post_sends_full_body() -> Result<(), PostsClientError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/posts").json_body(json!({
            "title": "New",
            "author": "Nia",
            "content": "fresh",
            "image": NEW_POST_IMAGE_PLACEHOLDER,
        }));
        then.status(201)
            .header("content-type", "application/json")
            .body(format!(
                r#"{{"id":"x1","title":"New","author":"Nia","content":"fresh","image":"{NEW_POST_IMAGE_PLACEHOLDER}"}}"#
            ));
    });

    let new_post = NewPost::new("New", "Nia", "fresh", None)?;
    let post = client(&server).create_post(&new_post).await?;

    mock.assert();
    assert_eq!(post.id.as_str(), "x1");
    assert_eq!(post.image(), Some(NEW_POST_IMAGE_PLACEHOLDER));
    Ok(())
}

#[tokio::test]
async fn update_post_patches_title_and_content() -> Result<(), PostsClientError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("PATCH")
            .path("/posts/2")
            .json_body(json!({"title": "B2", "content": "b"}));
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":2,"title":"B2","author":"Bo","content":"b"}"#);
    });

    let post = client(&server)
        .update_post(&PostId::from(2), &PostPatch::new("B2", "b"))
        .await?;

    mock.assert();
    assert_eq!(post.title, "B2");
    Ok(())
}

#[tokio::test]
async fn delete_post_ignores_body() -> Result<(), PostsClientError> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("DELETE").path("/posts/3");
        then.status(200).body("");
    });

    client(&server).delete_post(&PostId::from(3)).await?;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn missing_post_maps_to_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/posts/404");
        then.status(404).body("{}");
    });

    let err = client(&server)
        .get_post(&PostId::from(404))
        .await
        .expect_err("404 should fail");

    assert!(matches!(err, PostsClientError::NotFound));
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("PATCH").path("/posts/1");
        then.status(500).body("database on fire");
    });

    let err = client(&server)
        .update_post(&PostId::from(1), &PostPatch::new("t", "c"))
        .await
        .expect_err("500 should fail");

    match err {
        PostsClientError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database on fire");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/posts");
        then.status(200).body("<html>not json</html>");
    });

    let err = client(&server)
        .list_posts()
        .await
        .expect_err("html should not decode");

    assert!(matches!(err, PostsClientError::Decode(_)));
}

#[test]
fn empty_endpoint_is_rejected() {
    let err = PostsClientHttp::connect("/").err().expect("empty endpoint");
    assert!(matches!(err, PostsClientError::InvalidRequest(_)));
}

#[tokio::test]
async fn reserved_characters_in_id_stay_in_one_segment() -> Result<(), PostsClientError> {
    let server = MockServer::start();
    let get = server.mock(|when, then| {
        when.method("GET").path("/posts/a%2Fb%3Fc");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id":"a/b?c","title":"Odd","author":"Ann","content":"x"}"#);
    });
    let delete = server.mock(|when, then| {
        when.method("DELETE").path("/posts/a%2Fb%3Fc");
        then.status(204);
    });

    let id = PostId::from("a/b?c");
    let api = client(&server);
    let post = api.get_post(&id).await?;
    api.delete_post(&id).await?;

    get.assert();
    delete.assert();
    assert_eq!(post.id, id);
    Ok(())
}

#[test]
fn relative_endpoint_is_rejected() {
    let err = PostsClientHttp::connect("posts").err().expect("relative endpoint");
    assert!(matches!(err, PostsClientError::InvalidRequest(_)));
}
