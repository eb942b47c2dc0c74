use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const VERSION_PATTERN: &str = r"^(\d+)\.(\d+)(?:\.(\d+))?\.(RELEASE|BUILD-SNAPSHOT|M\d+|RC\d+)$";

static VERSION_REGEX: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN));

/// Qualifier suffix of an artifact version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Snapshot,
    Milestone(u32),
    ReleaseCandidate(u32),
    Release,
}

impl Qualifier {
    fn rank(&self) -> (u8, u32) {
        match self {
            Qualifier::Snapshot => (0, 0),
            Qualifier::Milestone(n) => (1, *n),
            Qualifier::ReleaseCandidate(n) => (2, *n),
            Qualifier::Release => (3, 0),
        }
    }
}

impl Ord for Qualifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Qualifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Snapshot => f.write_str("BUILD-SNAPSHOT"),
            Qualifier::Milestone(n) => write!(f, "M{n}"),
            Qualifier::ReleaseCandidate(n) => write!(f, "RC{n}"),
            Qualifier::Release => f.write_str("RELEASE"),
        }
    }
}

impl FromStr for Qualifier {
    type Err = ReleaseError;

    fn from_str(value: &str) -> Result<Self> {
        let number = |prefix: &str| {
            value[prefix.len()..]
                .parse::<u32>()
                .map_err(|_| ReleaseError::Version(format!("Invalid qualifier '{value}'")))
        };

        match value {
            "RELEASE" => Ok(Qualifier::Release),
            "BUILD-SNAPSHOT" => Ok(Qualifier::Snapshot),
            v if v.starts_with("RC") => number("RC").map(Qualifier::ReleaseCandidate),
            v if v.starts_with('M') => number("M").map(Qualifier::Milestone),
            _ => Err(ReleaseError::Version(format!("Invalid qualifier '{value}'"))),
        }
    }
}

/// A Spring-style artifact version, e.g. `1.8.0.RC1` or `1.8.1.BUILD-SNAPSHOT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactVersion {
    numbers: semver::Version,
    qualifier: Qualifier,
}

impl ArtifactVersion {
    pub fn new(major: u64, minor: u64, patch: u64, qualifier: Qualifier) -> Self {
        Self {
            numbers: semver::Version::new(major, minor, patch),
            qualifier,
        }
    }

    pub fn parse(version: &str) -> Result<Self> {
        let pattern = VERSION_REGEX
            .as_ref()
            .map_err(|e| ReleaseError::Version(format!("Regex error: {e}")))?;
        let captures = pattern
            .captures(version.trim())
            .ok_or_else(|| ReleaseError::Version(version.to_string()))?;

        let number = |index: usize| -> Result<u64> {
            captures
                .get(index)
                .map_or(Ok(0), |m| m.as_str().parse::<u64>())
                .map_err(|_| ReleaseError::Version(version.to_string()))
        };

        Ok(Self::new(
            number(1)?,
            number(2)?,
            number(3)?,
            captures[4].parse()?,
        ))
    }

    pub fn major(&self) -> u64 {
        self.numbers.major
    }

    pub fn minor(&self) -> u64 {
        self.numbers.minor
    }

    pub fn patch(&self) -> u64 {
        self.numbers.patch
    }

    /// The version the development line moves to once this one has shipped.
    ///
    /// Releases advance the bugfix number, milestones and release candidates keep
    /// their numbers, snapshots are already development versions.
    pub fn next_development_version(&self) -> Self {
        match self.qualifier {
            Qualifier::Release => Self::new(
                self.major(),
                self.minor(),
                self.patch() + 1,
                Qualifier::Snapshot,
            ),
            Qualifier::Snapshot => self.clone(),
            _ => Self::new(self.major(), self.minor(), self.patch(), Qualifier::Snapshot),
        }
    }
}

impl fmt::Display for ArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major(),
            self.minor(),
            self.patch(),
            self.qualifier
        )
    }
}

impl FromStr for ArtifactVersion {
    type Err = ReleaseError;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Ord for ArtifactVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numbers
            .cmp(&other.numbers)
            .then_with(|| self.qualifier.cmp(&other.qualifier))
    }
}

impl PartialOrd for ArtifactVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
