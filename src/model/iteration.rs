use crate::error::{ReleaseError, Result};
use crate::model::version::{ArtifactVersion, Qualifier};
use std::fmt;
use std::str::FromStr;

/// A milestone marker within a train.
///
/// Variants are declared in release order so the derived ordering matches it:
/// milestones, release candidates, GA, then service releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Iteration {
    Milestone(u32),
    ReleaseCandidate(u32),
    GA,
    ServiceRelease(u32),
}

impl Iteration {
    pub fn is_prerelease(&self) -> bool {
        matches!(self, Iteration::Milestone(_) | Iteration::ReleaseCandidate(_))
    }

    pub fn bugfix_number(&self) -> u64 {
        match self {
            Iteration::ServiceRelease(n) => u64::from(*n),
            _ => 0,
        }
    }

    /// Derives the artifact version of a module with the given `major.minor`
    /// base at this iteration.
    pub fn version_for(&self, major: u64, minor: u64) -> ArtifactVersion {
        let qualifier = match self {
            Iteration::Milestone(n) => Qualifier::Milestone(*n),
            Iteration::ReleaseCandidate(n) => Qualifier::ReleaseCandidate(*n),
            Iteration::GA | Iteration::ServiceRelease(_) => Qualifier::Release,
        };
        ArtifactVersion::new(major, minor, self.bugfix_number(), qualifier)
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Iteration::Milestone(n) => write!(f, "M{n}"),
            Iteration::ReleaseCandidate(n) => write!(f, "RC{n}"),
            Iteration::GA => f.write_str("GA"),
            Iteration::ServiceRelease(n) => write!(f, "SR{n}"),
        }
    }
}

impl FromStr for Iteration {
    type Err = ReleaseError;

    fn from_str(value: &str) -> Result<Self> {
        let upper = value.trim().to_ascii_uppercase();
        let number = |prefix: &str| -> Result<u32> {
            match upper[prefix.len()..].parse::<u32>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ReleaseError::Iteration(value.to_string())),
            }
        };

        if upper == "GA" {
            Ok(Iteration::GA)
        } else if upper.starts_with("RC") {
            number("RC").map(Iteration::ReleaseCandidate)
        } else if upper.starts_with("SR") {
            number("SR").map(Iteration::ServiceRelease)
        } else if upper.starts_with('M') {
            number("M").map(Iteration::Milestone)
        } else {
            Err(ReleaseError::Iteration(value.to_string()))
        }
    }
}
