use std::fmt;
use std::path::Path;

use roster_shared::GuildPayload;

use crate::config::RosterSource;

#[derive(Debug)]
pub enum RosterSourceError {
    Read(std::io::Error),
    Upstream(reqwest::Error),
    Status(u16),
    Parse(serde_json::Error),
}

impl fmt::Display for RosterSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "failed to read roster file: {e}"),
            Self::Upstream(e) => write!(f, "upstream request failed: {e}"),
            Self::Status(code) => write!(f, "upstream returned HTTP {code}"),
            Self::Parse(e) => write!(f, "roster payload is malformed: {e}"),
        }
    }
}

impl std::error::Error for RosterSourceError {}

/// Load and parse the roster from the configured source. One attempt, no caching.
pub async fn load_roster(
    client: &reqwest::Client,
    source: &RosterSource,
) -> Result<GuildPayload, RosterSourceError> {
    match source {
        RosterSource::File(path) => load_from_file(path).await,
        RosterSource::Upstream(url) => load_from_upstream(client, url.clone()).await,
    }
}

async fn load_from_file(path: &Path) -> Result<GuildPayload, RosterSourceError> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(RosterSourceError::Read)?;
    parse_payload(&raw)
}

async fn load_from_upstream(
    client: &reqwest::Client,
    url: reqwest::Url,
) -> Result<GuildPayload, RosterSourceError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(RosterSourceError::Upstream)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(RosterSourceError::Status(status.as_u16()));
    }
    let raw = resp.bytes().await.map_err(RosterSourceError::Upstream)?;
    parse_payload(&raw)
}

pub fn parse_payload(raw: &[u8]) -> Result<GuildPayload, RosterSourceError> {
    serde_json::from_slice(raw).map_err(RosterSourceError::Parse)
}
