use clap::ValueEnum;
use std::fmt;

/// Direction of a release transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Phase {
    /// Point builds at the milestone or release repository.
    Prepare,
    /// Return builds to the snapshot repository and development versions.
    Cleanup,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Prepare => "prepare",
            Phase::Cleanup => "cleanup",
        };
        f.write_str(label)
    }
}
