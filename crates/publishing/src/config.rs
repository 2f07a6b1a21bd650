/// Publishing API connection settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PublishingApiConfig {
    /// Base URL of the Publishing API (default: `http://localhost:3093`).
    pub url: String,
    /// Optional bearer token sent with every request.
    pub bearer_token: Option<String>,
    /// Per-request timeout in seconds (default: `10`).
    pub timeout_secs: u64,
}

impl PublishingApiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                        | Default                  |
    /// |--------------------------------|--------------------------|
    /// | `PUBLISHING_API_URL`           | `http://localhost:3093`  |
    /// | `PUBLISHING_API_BEARER_TOKEN`  | unset                    |
    /// | `PUBLISHING_API_TIMEOUT_SECS`  | `10`                     |
    pub fn from_env() -> Self {
        let url = std::env::var("PUBLISHING_API_URL")
            .unwrap_or_else(|_| "http://localhost:3093".into());

        let bearer_token = std::env::var("PUBLISHING_API_BEARER_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        let timeout_secs: u64 = std::env::var("PUBLISHING_API_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("PUBLISHING_API_TIMEOUT_SECS must be a valid u64");

        Self {
            url,
            bearer_token,
            timeout_secs,
        }
    }
}
