use crate::agents::{TicketBranch, VersionControl};
use crate::error::Result;
use crate::logger;
use crate::model::{Project, Train};
use crate::tracker::{IssueTracker, Ticket};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

/// A ticket branch together with the tracker's view of its ticket, if known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTicket {
    pub branch: TicketBranch,
    pub ticket: Option<Ticket>,
}

/// All ticket branches found in one project's repository.
#[derive(Debug, Clone)]
pub struct ProjectBranches {
    pub project: Project,
    pub entries: Vec<BranchTicket>,
}

impl ProjectBranches {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Branches whose ticket is already resolved and can likely be deleted.
    pub fn resolved(&self) -> impl Iterator<Item = &BranchTicket> {
        self.entries
            .iter()
            .filter(|entry| entry.ticket.as_ref().is_some_and(|t| t.resolved))
    }
}

/// Collects ticket branches across the projects of a train.
pub struct BranchAggregator<'a> {
    version_control: &'a dyn VersionControl,
    tracker: &'a dyn IssueTracker,
}

impl<'a> BranchAggregator<'a> {
    pub fn new(version_control: &'a dyn VersionControl, tracker: &'a dyn IssueTracker) -> Self {
        Self {
            version_control,
            tracker,
        }
    }

    pub fn for_project(&self, project: &Project) -> Result<ProjectBranches> {
        let listing = self.version_control.list_ticket_branches(project)?;
        logger::verbose(format!(
            "{}: {} ticket branch(es)",
            project.key(),
            listing.len()
        ));

        let tickets = if listing.is_empty() {
            Vec::new()
        } else {
            self.tracker.find_tickets(project, &listing.ticket_ids())?
        };

        let entries = listing
            .branches
            .into_iter()
            .map(|branch| {
                let ticket = tickets.iter().find(|t| t.id == branch.ticket_id).cloned();
                BranchTicket { branch, ticket }
            })
            .collect();

        Ok(ProjectBranches {
            project: listing.project,
            entries,
        })
    }

    /// Queries every module's project in parallel; the first failure aborts the
    /// whole lookup. Results are ordered by project key.
    pub fn for_train(&self, train: &Train) -> Result<Vec<ProjectBranches>> {
        let projects: Vec<&Project> = train.modules().iter().map(|m| m.project()).collect();

        let pb = ProgressBar::new(projects.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("  [{bar:40}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("=>-"));
        }
        pb.set_message(format!("Scanning {} branches", train.name()));

        let mut results = projects
            .par_iter()
            .map(|project| {
                let result = self.for_project(project);
                pb.inc(1);
                result
            })
            .collect::<Result<Vec<_>>>()?;

        pb.finish_and_clear();
        results.sort_by(|a, b| a.project.key().cmp(b.project.key()));
        Ok(results)
    }
}
