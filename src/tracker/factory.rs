use crate::config::TrackerConfig;
use crate::error::Result;
use crate::tracker::jira::Credentials;
use crate::tracker::{IssueTracker, JiraClient};
use std::sync::Arc;

pub const USERNAME_ENV: &str = "RELEASE_TRAIN_TRACKER_USERNAME";
pub const PASSWORD_ENV: &str = "RELEASE_TRAIN_TRACKER_PASSWORD";

pub struct TrackerFactory;

impl TrackerFactory {
    /// Creates the tracker client, taking credentials from the environment when set.
    pub fn create(config: &TrackerConfig) -> Result<Arc<dyn IssueTracker>> {
        let credentials = match (std::env::var(USERNAME_ENV), std::env::var(PASSWORD_ENV)) {
            (Ok(username), Ok(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        let client = JiraClient::new(&config.url, credentials)?;
        Ok(Arc::new(client))
    }
}
