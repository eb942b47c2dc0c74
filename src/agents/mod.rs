pub mod version_control;
pub mod workspace;

pub use version_control::{Author, GitAgent, TicketBranch, TicketBranches, VersionControl};
pub use workspace::Workspace;
