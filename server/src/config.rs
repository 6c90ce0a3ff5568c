use std::path::PathBuf;
use std::time::Duration;

pub const TIBIADATA_GUILD_URL: &str = "https://api.tibiadata.com/v4/guild";

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";
pub const DEFAULT_UPSTREAM_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 3;

/// Where `/api/guild` reads the roster from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    File(PathBuf),
    Upstream(reqwest::Url),
}

impl RosterSource {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Upstream(_) => "upstream",
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `ROSTER_DATA_PATH` wins over `ROSTER_UPSTREAM_URL`, which wins over a
/// TibiaData URL built from `GUILD_NAME`.
pub fn roster_source() -> Option<RosterSource> {
    if let Some(path) = non_empty_env("ROSTER_DATA_PATH") {
        return Some(RosterSource::File(PathBuf::from(path)));
    }
    if let Some(url) = non_empty_env("ROSTER_UPSTREAM_URL")
        && let Ok(url) = reqwest::Url::parse(&url)
    {
        return Some(RosterSource::Upstream(url));
    }
    non_empty_env("GUILD_NAME")
        .and_then(|name| tibiadata_guild_url(&name))
        .map(RosterSource::Upstream)
}

/// TibiaData guild endpoint with the guild name as an encoded path segment.
pub fn tibiadata_guild_url(guild_name: &str) -> Option<reqwest::Url> {
    let mut url = reqwest::Url::parse(TIBIADATA_GUILD_URL).ok()?;
    url.path_segments_mut().ok()?.push(guild_name);
    Some(url)
}

pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn static_dir() -> PathBuf {
    non_empty_env("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

pub fn upstream_http_timeout() -> Duration {
    std::env::var("UPSTREAM_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(DEFAULT_UPSTREAM_HTTP_TIMEOUT_SECS))
}

pub fn upstream_connect_timeout() -> Duration {
    std::env::var("UPSTREAM_CONNECT_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS))
}
