use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::config::{RosterSource, upstream_connect_timeout, upstream_http_timeout};

#[derive(Clone)]
pub struct AppState {
    /// None when neither a data file nor an upstream URL is configured.
    pub source: Option<Arc<RosterSource>>,
    pub static_dir: PathBuf,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(source: Option<RosterSource>, static_dir: PathBuf) -> Self {
        let request_timeout = upstream_http_timeout();
        let connect_timeout = upstream_connect_timeout();
        let http_client = reqwest::Client::builder()
            .user_agent("guild-roster/0.1")
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(
                    error = %e,
                    "failed to build configured HTTP client, falling back to defaults"
                );
                reqwest::Client::new()
            });
        Self {
            source: source.map(Arc::new),
            static_dir,
            http_client,
        }
    }
}
