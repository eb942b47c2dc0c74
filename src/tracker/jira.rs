use crate::error::{ReleaseError, Result};
use crate::logger;
use crate::model::{ModuleIteration, Project};
use crate::tracker::{Changelog, IssueTracker, Ticket};
use jiff::Zoned;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const SEARCH_PATH: &str = "rest/api/2/search";
const SEARCH_FIELDS: &str = "summary,status,resolution";
const PAGE_SIZE: usize = 100;

/// Basic-auth credentials for the tracker.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// JIRA REST client.
pub struct JiraClient {
    client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl JiraClient {
    pub fn new(base_url: &str, credentials: Option<Credentials>) -> Result<Self> {
        let base_url = Self::validate_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("release-train/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    fn validate_base_url(base_url: &str) -> Result<Url> {
        let mut parsed = Url::parse(base_url).map_err(|_| {
            ReleaseError::Config(format!("Invalid issue tracker URL: {base_url}"))
        })?;

        match parsed.scheme() {
            "https" | "http" => {}
            scheme => {
                return Err(ReleaseError::Config(format!(
                    "Unsupported issue tracker scheme: {scheme}"
                )));
            }
        }

        // Url::join drops the last segment unless the path ends with a slash.
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        Ok(parsed)
    }

    fn search(&self, jql: &str) -> Result<Vec<JiraIssue>> {
        let url = self
            .base_url
            .join(SEARCH_PATH)
            .map_err(|e| ReleaseError::IssueTracker(format!("Invalid search URL: {e}")))?;

        let mut issues = Vec::new();
        loop {
            logger::verbose(format!("JQL [{}]: {jql}", issues.len()));

            let mut request = self
                .client
                .get(url.clone())
                .query(&search_params(jql, issues.len()));
            if let Some(credentials) = &self.credentials {
                request = request.basic_auth(&credentials.username, Some(&credentials.password));
            }

            let response = request.send()?;
            if !response.status().is_success() {
                return Err(ReleaseError::IssueTracker(format!(
                    "HTTP {} for query '{jql}'",
                    response.status()
                )));
            }

            let page = parse_search_response(&response.text()?)?;
            let received = page.issues.len();
            issues.extend(page.issues);

            if received == 0 || issues.len() >= page.total {
                return Ok(issues);
            }
        }
    }
}

impl IssueTracker for JiraClient {
    fn find_tickets(&self, project: &Project, ids: &[String]) -> Result<Vec<Ticket>> {
        match tickets_query(project, ids) {
            Some(jql) => Ok(self.search(&jql)?.into_iter().map(Ticket::from).collect()),
            None => Ok(Vec::new()),
        }
    }

    fn changelog_for(&self, module: &ModuleIteration) -> Result<Changelog> {
        let tickets = self
            .search(&changelog_query(module))?
            .into_iter()
            .map(Ticket::from)
            .collect();

        Ok(Changelog::new(
            module.version().to_string(),
            Zoned::now().date(),
            tickets,
        ))
    }
}

fn tickets_query(project: &Project, ids: &[String]) -> Option<String> {
    let prefix = format!("{}-", project.tracker_key());
    let keys: Vec<&str> = ids
        .iter()
        .map(String::as_str)
        .filter(|id| id.starts_with(&prefix))
        .collect();

    if keys.is_empty() {
        return None;
    }

    Some(format!(
        "project = {} AND key in ({}) ORDER BY key ASC",
        project.tracker_key(),
        keys.join(", ")
    ))
}

fn changelog_query(module: &ModuleIteration) -> String {
    format!(
        "project = {} AND fixVersion = \"{}\" AND resolution is not EMPTY ORDER BY priority DESC, key ASC",
        module.project().tracker_key(),
        module.short_version_string()
    )
}

/// Query parameters for one page of a search. `validateQuery=warn` keeps
/// `key in (...)` working when a referenced ticket no longer exists.
fn search_params(jql: &str, start_at: usize) -> [(&'static str, String); 5] {
    [
        ("jql", jql.to_string()),
        ("fields", SEARCH_FIELDS.to_string()),
        ("startAt", start_at.to_string()),
        ("maxResults", PAGE_SIZE.to_string()),
        ("validateQuery", "warn".to_string()),
    ]
}

fn parse_search_response(body: &str) -> Result<SearchResponse> {
    serde_json::from_str(body).map_err(|e| {
        ReleaseError::IssueTracker(format!("Failed to parse search response: {e}"))
    })
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total: usize,
    #[serde(default)]
    issues: Vec<JiraIssue>,
}

#[derive(Debug, Deserialize)]
struct JiraIssue {
    key: String,
    fields: JiraFields,
}

#[derive(Debug, Deserialize)]
struct JiraFields {
    #[serde(default)]
    summary: String,
    status: Option<Named>,
    resolution: Option<Named>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

impl From<JiraIssue> for Ticket {
    fn from(issue: JiraIssue) -> Self {
        let status = issue
            .fields
            .status
            .map(|s| s.name)
            .unwrap_or_else(|| "Unknown".to_string());
        let ticket = Ticket::new(issue.key, issue.fields.summary);

        if issue.fields.resolution.is_some() {
            ticket.resolved(status)
        } else {
            Ticket { status, ..ticket }
        }
    }
}
