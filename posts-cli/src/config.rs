use posts_client::DEFAULT_BASE_URL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
}

impl AppConfig {
    /// `--server` wins over `POSTS_BASE_URL` (also read from `.env`).
    pub fn from_env(server: Option<String>) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = server
            .or_else(|| std::env::var("POSTS_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());

        Self::new(base_url)
    }

    fn new(base_url: String) -> anyhow::Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            anyhow::bail!("invalid server url {base_url:?}: expected http(s)://");
        }
        Ok(Self { base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_default() {
        let config = AppConfig::from_env(Some("http://example.com/posts/".into())).unwrap();
        assert_eq!(config.base_url, "http://example.com/posts");
    }

    #[test]
    fn rejects_non_http_url() {
        assert!(AppConfig::new("localhost:3000/posts".into()).is_err());
    }
}
