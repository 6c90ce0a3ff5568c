use std::fmt;

use roster_shared::{GuildPayload, GuildRoster};

/// Why the roster could not be loaded. Every variant is shown to the user the
/// same way; the detail only goes to the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    Network(String),
    Status(u16),
    Parse(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "fetch error: {e}"),
            Self::Status(code) => write!(f, "HTTP {code}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

/// Fetch the guild roster from `url`. One attempt, no timeout.
pub async fn fetch_roster(url: &str) -> Result<GuildRoster, FetchFailure> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchFailure::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(FetchFailure::Status(resp.status()));
    }

    resp.json::<GuildPayload>()
        .await
        .map(|payload| payload.guild)
        .map_err(|e| FetchFailure::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::FetchFailure;

    #[test]
    fn display_includes_the_cause() {
        assert_eq!(FetchFailure::Status(503).to_string(), "HTTP 503");
        assert_eq!(
            FetchFailure::Network("offline".into()).to_string(),
            "fetch error: offline"
        );
        assert_eq!(
            FetchFailure::Parse("missing field `rank`".into()).to_string(),
            "parse error: missing field `rank`"
        );
    }
}
