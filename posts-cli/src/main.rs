use crate::config::AppConfig;
use crate::dialogs::TerminalDialogs;
use crate::logging::init_logging;
use clap::Parser;
use posts_client::{
    CONFIRM_DELETE, Dialogs, Event, NewPost, PostClient, PostId, PostPatch, PostsApi,
    PostsClientHttp,
};

mod config;
mod dialogs;
mod logging;

#[derive(Parser, Debug)]
#[clap(about = "Browse and edit posts on a REST posts collection")]
struct Cli {
    /// Collection URL, e.g. http://localhost:3000/posts
    #[clap(short, long)]
    server: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    ListPosts,
    GetPost {
        id: PostId,
    },
    CreatePost {
        #[clap(long)]
        title: String,
        #[clap(long)]
        content: String,
        #[clap(long, default_value = "")]
        author: String,
        #[clap(long)]
        image: Option<String>,
    },
    UpdatePost {
        id: PostId,
        #[clap(long)]
        title: Option<String>,
        #[clap(long)]
        content: Option<String>,
    },
    DeletePost {
        id: PostId,
        /// Skip the confirmation prompt
        #[clap(short, long)]
        yes: bool,
    },
    /// Render the page the browser client would show
    Show {
        id: Option<PostId>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let config = AppConfig::from_env(args.server)?;
    let client = PostsClientHttp::connect(&config.base_url)?;

    match args.command {
        Command::ListPosts => {
            let posts = client.list_posts().await?;
            println!("Posts ({})", posts.len());
            for post in posts {
                println!("- [{}] {} (by {})", post.id, post.title, post.author);
            }
        }
        Command::GetPost { id } => {
            let post = client.get_post(&id).await?;
            println!("{}", post);
            println!("{}", post.content);
        }
        Command::CreatePost {
            title,
            content,
            author,
            image,
        } => {
            let post = client
                .create_post(&NewPost::new(title, author, content, image)?)
                .await?;
            println!("Post created! ID: {}", post.id);
        }
        Command::UpdatePost { id, title, content } => {
            let patch = PostPatch { title, content };
            if patch.is_empty() {
                anyhow::bail!("nothing to update: pass --title and/or --content");
            }
            let post = client.update_post(&id, &patch).await?;
            println!("Post updated: {}", post)
        }
        Command::DeletePost { id, yes } => {
            if !yes && !TerminalDialogs.confirm(CONFIRM_DELETE) {
                println!("Nothing deleted.");
                return Ok(());
            }
            client.delete_post(&id).await?;
            println!("Post deleted!")
        }
        Command::Show { id } => {
            let mut page = PostClient::new(client, TerminalDialogs);
            page.start().await;
            if let Some(id) = id {
                page.dispatch(Event::PostClicked(id)).await;
            }
            print!("{}", page.view());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_update_with_partial_fields() {
        let cli = Cli::try_parse_from(["posts-cli", "update-post", "2", "--title", "B2"]).unwrap();

        match cli.command {
            Command::UpdatePost { id, title, content } => {
                assert_eq!(id, PostId::from(2));
                assert_eq!(title.as_deref(), Some("B2"));
                assert_eq!(content, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_post_id() {
        assert!(Cli::try_parse_from(["posts-cli", "get-post", " "]).is_err());
    }

    #[test]
    fn show_id_is_optional() {
        let cli = Cli::try_parse_from(["posts-cli", "show"]).unwrap();
        assert!(matches!(cli.command, Command::Show { id: None }));
    }
}
