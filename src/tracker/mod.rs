use crate::error::Result;
use crate::model::{ModuleIteration, Project};

pub mod factory;
pub mod jira;
pub mod ticket;

pub use factory::TrackerFactory;
pub use jira::JiraClient;
pub use ticket::{Changelog, Ticket, TicketReference};

/// Issue tracker queries needed by the release operations.
pub trait IssueTracker: Send + Sync {
    /// Looks up the given ticket ids of a project. Unknown ids are left out.
    fn find_tickets(&self, project: &Project, ids: &[String]) -> Result<Vec<Ticket>>;

    /// Builds the changelog of everything fixed in the module iteration.
    fn changelog_for(&self, module: &ModuleIteration) -> Result<Changelog>;
}
