use crate::error::{ReleaseError, Result};
use crate::model::iteration::Iteration;
use crate::model::project::Project;
use crate::model::version::ArtifactVersion;
use std::fmt;

/// A project's participation in a train, pinned to a `major.minor` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    project: Project,
    major: u64,
    minor: u64,
}

impl Module {
    pub fn new(project: Project, major: u64, minor: u64) -> Self {
        Self {
            project,
            major,
            minor,
        }
    }

    /// Parses a `major.minor` base version such as `1.8`.
    pub fn parse(project: Project, base_version: &str) -> Result<Self> {
        let invalid = || {
            ReleaseError::Version(format!(
                "'{base_version}' for {} is not a major.minor version",
                project.key()
            ))
        };

        let (major, minor) = base_version.trim().split_once('.').ok_or_else(invalid)?;
        let major = major.parse::<u64>().map_err(|_| invalid())?;
        let minor = minor.parse::<u64>().map_err(|_| invalid())?;

        Ok(Self::new(project, major, minor))
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn base_version(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

/// A named release line whose modules move through iterations together.
#[derive(Debug, Clone)]
pub struct Train {
    name: String,
    modules: Vec<Module>,
    iterations: Vec<Iteration>,
}

impl Train {
    pub fn new(
        name: impl Into<String>,
        modules: Vec<Module>,
        mut iterations: Vec<Iteration>,
    ) -> Self {
        iterations.sort();
        iterations.dedup();

        Self {
            name: name.into(),
            modules,
            iterations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn iterations(&self) -> &[Iteration] {
        &self.iterations
    }

    pub fn module(&self, project: &Project) -> Option<&Module> {
        self.modules.iter().find(|m| m.project() == project)
    }

    pub fn contains(&self, project: &Project) -> bool {
        self.module(project).is_some()
    }

    /// Looks up an iteration by name, requiring it to be part of this train.
    pub fn iteration(&self, name: &str) -> Result<Iteration> {
        let iteration: Iteration = name.parse()?;
        if self.iterations.contains(&iteration) {
            Ok(iteration)
        } else {
            Err(ReleaseError::Iteration(format!(
                "{iteration} is not an iteration of train {}",
                self.name
            )))
        }
    }

    pub fn previous_iteration(&self, iteration: Iteration) -> Option<Iteration> {
        let index = self.iterations.iter().position(|it| *it == iteration)?;
        index.checked_sub(1).map(|previous| self.iterations[previous])
    }

    /// Materializes all modules of this train at the given iteration.
    pub fn at(&self, iteration: Iteration) -> Result<TrainIteration> {
        if !self.iterations.contains(&iteration) {
            return Err(ReleaseError::Iteration(format!(
                "{iteration} is not an iteration of train {}",
                self.name
            )));
        }

        let modules = self
            .modules
            .iter()
            .map(|module| ModuleIteration {
                module: module.clone(),
                iteration,
            })
            .collect();

        Ok(TrainIteration {
            train: self.clone(),
            iteration,
            modules,
        })
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One module at one iteration of a train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleIteration {
    module: Module,
    iteration: Iteration,
}

impl ModuleIteration {
    pub fn project(&self) -> &Project {
        self.module.project()
    }

    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    pub fn version(&self) -> ArtifactVersion {
        self.iteration
            .version_for(self.module.major, self.module.minor)
    }

    /// Short form used in banners and as the tracker's fix version, e.g. `1.8 RC1`.
    pub fn short_version_string(&self) -> String {
        format!("{} {}", self.module.base_version(), self.iteration)
    }

    /// Project name plus short version, e.g. `Spring Data Commons 1.8 RC1`.
    pub fn display(&self) -> String {
        format!("{} {}", self.project().full_name(), self.short_version_string())
    }

    pub fn release_tag(&self) -> String {
        self.version().to_string()
    }
}

impl fmt::Display for ModuleIteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// All modules of one train at one iteration, in the train's module order.
#[derive(Debug, Clone)]
pub struct TrainIteration {
    train: Train,
    iteration: Iteration,
    modules: Vec<ModuleIteration>,
}

impl TrainIteration {
    pub fn train(&self) -> &Train {
        &self.train
    }

    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    pub fn modules(&self) -> impl Iterator<Item = &ModuleIteration> {
        self.modules.iter()
    }

    /// Modules of every project but `excluded`; the iterator borrows only `self`.
    pub fn modules_except<'a>(
        &'a self,
        excluded: &Project,
    ) -> impl Iterator<Item = &'a ModuleIteration> + use<'a> {
        let excluded = excluded.key().to_string();
        self.modules
            .iter()
            .filter(move |m| m.project().key() != excluded)
    }

    pub fn module(&self, project: &Project) -> Option<&ModuleIteration> {
        self.modules.iter().find(|m| m.project() == project)
    }

    pub fn previous(&self) -> Option<TrainIteration> {
        self.train
            .previous_iteration(self.iteration)
            .and_then(|previous| self.train.at(previous).ok())
    }
}

impl fmt::Display for TrainIteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.train.name(), self.iteration)
    }
}
