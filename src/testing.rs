//! In-memory collaborators for unit tests.

use crate::agents::{Author, TicketBranch, TicketBranches, VersionControl};
use crate::config::{ReleaseConfig, ReleaseModel, SAMPLE};
use crate::error::{ReleaseError, Result};
use crate::logger::Logger;
use crate::model::{ModuleIteration, Project};
use crate::tracker::{Changelog, IssueTracker, Ticket, TicketReference};
use jiff::civil::date;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

pub fn sample_config() -> ReleaseConfig {
    ReleaseConfig::parse(SAMPLE).unwrap()
}

pub fn sample_model() -> ReleaseModel {
    sample_config().resolve().unwrap()
}

#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(String, String)>>,
}

impl RecordingLogger {
    pub fn messages(&self) -> Vec<(String, String)> {
        self.entries.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, subject: &str, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((subject.to_string(), message.to_string()));
    }

    fn warn(&self, subject: &str, message: &str) {
        self.log(subject, message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommit {
    pub module: String,
    pub message: String,
    pub author: Option<Author>,
    pub files: Vec<PathBuf>,
}

#[derive(Default)]
pub struct FakeVersionControl {
    commits: Mutex<Vec<RecordedCommit>>,
    branches: HashMap<String, Vec<TicketBranch>>,
    delays: HashMap<String, Duration>,
    fail_commits: bool,
}

impl FakeVersionControl {
    pub fn failing() -> Self {
        Self {
            fail_commits: true,
            ..Self::default()
        }
    }

    pub fn with_branches(mut self, project: &str, tickets: &[&str]) -> Self {
        let branches = tickets
            .iter()
            .map(|ticket| TicketBranch {
                name: format!("issue/{ticket}"),
                ticket_id: ticket.to_string(),
                remote: false,
            })
            .collect();
        self.branches.insert(project.to_string(), branches);
        self
    }

    pub fn with_delay(mut self, project: &str, delay: Duration) -> Self {
        self.delays.insert(project.to_string(), delay);
        self
    }

    pub fn commits(&self) -> Vec<RecordedCommit> {
        self.commits.lock().unwrap().clone()
    }
}

impl VersionControl for FakeVersionControl {
    fn commit(
        &self,
        module: &ModuleIteration,
        message: &str,
        author: Option<&Author>,
        files: &[PathBuf],
    ) -> Result<()> {
        if self.fail_commits {
            return Err(ReleaseError::GitOperation("commit rejected".to_string()));
        }

        self.commits.lock().unwrap().push(RecordedCommit {
            module: module.display(),
            message: message.to_string(),
            author: author.cloned(),
            files: files.to_vec(),
        });
        Ok(())
    }

    fn list_ticket_branches(&self, project: &Project) -> Result<TicketBranches> {
        if let Some(delay) = self.delays.get(project.key()) {
            thread::sleep(*delay);
        }

        Ok(TicketBranches {
            project: project.clone(),
            branches: self.branches.get(project.key()).cloned().unwrap_or_default(),
        })
    }

    fn ticket_references_between(
        &self,
        _project: &Project,
        _from: Option<&ModuleIteration>,
        _to: &ModuleIteration,
    ) -> Result<Vec<TicketReference>> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
pub struct FakeTracker {
    tickets: HashMap<String, Vec<Ticket>>,
    unavailable: bool,
}

impl FakeTracker {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_tickets(mut self, project: &str, tickets: Vec<Ticket>) -> Self {
        self.tickets.insert(project.to_string(), tickets);
        self
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(ReleaseError::IssueTracker("HTTP 503".to_string()));
        }
        Ok(())
    }
}

impl IssueTracker for FakeTracker {
    fn find_tickets(&self, project: &Project, ids: &[String]) -> Result<Vec<Ticket>> {
        self.check_available()?;
        Ok(self
            .tickets
            .get(project.key())
            .map(|tickets| {
                tickets
                    .iter()
                    .filter(|t| ids.contains(&t.id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn changelog_for(&self, module: &ModuleIteration) -> Result<Changelog> {
        self.check_available()?;
        Ok(Changelog::new(
            module.version().to_string(),
            date(2014, 8, 13),
            self.tickets
                .get(module.project().key())
                .cloned()
                .unwrap_or_default(),
        ))
    }
}
