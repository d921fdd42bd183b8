use anyhow::Context;

/// Name of the environment variable holding the service base URL.
pub const API_BASE_VAR: &str = "RANKER_API_BASE";
/// Name of the optional environment variable holding the owner identifier.
pub const OWNER_VAR: &str = "RANKER_USER_ID";

/// Environment configuration, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub owner: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base = std::env::var(API_BASE_VAR)
            .with_context(|| format!("{API_BASE_VAR} must point at the ranking service"))?;
        let owner = std::env::var(OWNER_VAR)
            .ok()
            .filter(|value| !value.is_empty());
        Ok(Self { api_base, owner })
    }
}
