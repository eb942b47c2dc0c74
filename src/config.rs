use crate::agents::Author;
use crate::error::{ReleaseError, Result};
use crate::model::{Iteration, Module, Project, Train};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "release-train.toml";

/// Release tooling configuration, read from `release-train.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseConfig {
    pub workspace: WorkspaceConfig,
    #[serde(default)]
    pub git: Option<GitConfig>,
    pub tracker: TrackerConfig,
    pub repositories: RepositoriesConfig,
    pub update: UpdateConfig,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
    #[serde(default)]
    pub trains: Vec<TrainConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceConfig {
    pub root: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitConfig {
    pub author: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    pub url: String,
}

/// Artifact repositories referenced from build files.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoriesConfig {
    pub snapshot: String,
    pub milestone: String,
    pub release: String,
}

impl RepositoriesConfig {
    /// Repository builds point at while an iteration is being released.
    pub fn release_url_for(&self, iteration: Iteration) -> &str {
        if iteration.is_prerelease() {
            &self.milestone
        } else {
            &self.release
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateConfig {
    pub shared_project: String,
    pub build_project: String,
    pub gradle_property: String,
    #[serde(default = "default_changelog_message")]
    pub changelog_message: String,
}

fn default_changelog_message() -> String {
    "Updated changelog.".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub repository: String,
    pub tracker_key: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrainConfig {
    pub name: String,
    pub iterations: Vec<String>,
    /// Project key to `major.minor` base version.
    pub modules: BTreeMap<String, String>,
}

impl ReleaseConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ReleaseError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: ReleaseConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        Self::validate_url("tracker.url", &self.tracker.url)?;
        Self::validate_url("repositories.snapshot", &self.repositories.snapshot)?;
        Self::validate_url("repositories.milestone", &self.repositories.milestone)?;
        Self::validate_url("repositories.release", &self.repositories.release)?;

        let mut keys = HashSet::new();
        for project in &self.projects {
            if !keys.insert(project.key.as_str()) {
                return Err(ReleaseError::Config(format!(
                    "Project '{}' is declared twice",
                    project.key
                )));
            }
        }

        for project in &self.projects {
            for dependency in &project.dependencies {
                if !keys.contains(dependency.as_str()) {
                    return Err(ReleaseError::Config(format!(
                        "Project '{}' depends on undeclared project '{dependency}'",
                        project.key
                    )));
                }
            }
        }

        for key in [&self.update.shared_project, &self.update.build_project] {
            if !keys.contains(key.as_str()) {
                return Err(ReleaseError::Config(format!(
                    "[update] references undeclared project '{key}'"
                )));
            }
        }

        for train in &self.trains {
            if let Some(key) = train.modules.keys().find(|k| !keys.contains(k.as_str())) {
                return Err(ReleaseError::Config(format!(
                    "Train '{}' references undeclared project '{key}'",
                    train.name
                )));
            }
        }

        Ok(())
    }

    fn validate_url(field: &str, value: &str) -> Result<()> {
        let parsed = Url::parse(value)
            .map_err(|_| ReleaseError::Config(format!("{field}: invalid URL '{value}'")))?;

        match parsed.scheme() {
            "https" | "http" => Ok(()),
            scheme => Err(ReleaseError::Config(format!(
                "{field}: unsupported scheme '{scheme}'"
            ))),
        }
    }

    pub fn author(&self) -> Option<Author> {
        self.git.as_ref().map(|git| Author {
            name: git.author.clone(),
            email: git.email.clone(),
        })
    }

    /// Resolves the declared projects and trains into the domain model.
    pub fn resolve(&self) -> Result<ReleaseModel> {
        let declared: HashMap<&str, &ProjectConfig> = self
            .projects
            .iter()
            .map(|project| (project.key.as_str(), project))
            .collect();

        let mut resolved = HashMap::new();
        let mut projects = Vec::with_capacity(self.projects.len());
        for project in &self.projects {
            let mut visiting = Vec::new();
            projects.push(resolve_project(
                &project.key,
                &declared,
                &mut resolved,
                &mut visiting,
            )?);
        }

        let trains = self
            .trains
            .iter()
            .map(|train| resolve_train(train, &projects))
            .collect::<Result<Vec<_>>>()?;

        Ok(ReleaseModel { projects, trains })
    }
}

fn resolve_project(
    key: &str,
    declared: &HashMap<&str, &ProjectConfig>,
    resolved: &mut HashMap<String, Project>,
    visiting: &mut Vec<String>,
) -> Result<Project> {
    if let Some(project) = resolved.get(key) {
        return Ok(project.clone());
    }
    if visiting.iter().any(|k| k == key) {
        visiting.push(key.to_string());
        return Err(ReleaseError::Config(format!(
            "Dependency cycle: {}",
            visiting.join(" -> ")
        )));
    }

    let config = declared
        .get(key)
        .ok_or_else(|| ReleaseError::UnknownProject(key.to_string()))?;

    visiting.push(key.to_string());
    let dependencies = config
        .dependencies
        .iter()
        .map(|dependency| resolve_project(dependency, declared, resolved, visiting))
        .collect::<Result<Vec<_>>>()?;
    visiting.pop();

    let mut project = Project::new(
        &config.key,
        &config.name,
        &config.repository,
        &config.tracker_key,
    )
    .with_dependencies(dependencies);
    if let Some(full_name) = &config.full_name {
        project = project.with_full_name(full_name);
    }

    resolved.insert(key.to_string(), project.clone());
    Ok(project)
}

/// Modules follow the order in which projects are declared.
fn resolve_train(config: &TrainConfig, projects: &[Project]) -> Result<Train> {
    let modules = projects
        .iter()
        .filter_map(|project| {
            config
                .modules
                .get(project.key())
                .map(|version| Module::parse(project.clone(), version))
        })
        .collect::<Result<Vec<_>>>()?;

    let iterations = config
        .iterations
        .iter()
        .map(|name| name.parse::<Iteration>())
        .collect::<Result<Vec<_>>>()?;

    Ok(Train::new(&config.name, modules, iterations))
}

/// Projects and trains declared in the configuration.
#[derive(Debug, Clone)]
pub struct ReleaseModel {
    pub projects: Vec<Project>,
    pub trains: Vec<Train>,
}

impl ReleaseModel {
    pub fn project(&self, key: &str) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| ReleaseError::UnknownProject(key.to_string()))
    }

    pub fn train(&self, name: &str) -> Result<&Train> {
        self.trains
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ReleaseError::UnknownTrain(name.to_string()))
    }
}

#[cfg(test)]
pub(crate) const SAMPLE: &str = r#"
[workspace]
root = "/tmp/release-train"

[git]
author = "Release Bot"
email = "release@example.org"

[tracker]
url = "https://jira.example.org"

[repositories]
snapshot = "https://repo.spring.io/libs-snapshot"
milestone = "https://repo.spring.io/libs-milestone"
release = "https://repo.spring.io/libs-release"

[update]
shared_project = "commons"
build_project = "build"
gradle_property = "springDataCommonsVersion"

[[projects]]
key = "build"
name = "Build"
repository = "spring-data-build"
tracker_key = "DATABUILD"

[[projects]]
key = "commons"
name = "Commons"
full_name = "Spring Data Commons"
repository = "spring-data-commons"
tracker_key = "DATACMNS"
dependencies = ["build"]

[[projects]]
key = "jpa"
name = "JPA"
full_name = "Spring Data JPA"
repository = "spring-data-jpa"
tracker_key = "DATAJPA"
dependencies = ["commons"]

[[projects]]
key = "neo4j"
name = "Neo4j"
full_name = "Spring Data Neo4j"
repository = "spring-data-neo4j"
tracker_key = "DATAGRAPH"
dependencies = ["commons"]

[[trains]]
name = "Dijkstra"
iterations = ["M1", "RC1", "GA", "SR1"]
modules = { neo4j = "3.1", jpa = "1.6", commons = "1.8", build = "1.4" }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_resolves_sample() {
        let config = ReleaseConfig::parse(SAMPLE).unwrap();
        let model = config.resolve().unwrap();

        let train = model.train("dijkstra").unwrap();
        let keys: Vec<&str> = train.modules().iter().map(|m| m.project().key()).collect();
        assert_eq!(keys, ["build", "commons", "jpa", "neo4j"]);

        let jpa = model.project("jpa").unwrap();
        assert!(jpa.depends_on(model.project("commons").unwrap()));
        assert!(jpa.depends_on(model.project("build").unwrap()));
        assert_eq!(config.update.changelog_message, "Updated changelog.");
        assert_eq!(config.author().unwrap().name, "Release Bot");
    }

    #[test]
    fn picks_repository_by_iteration() {
        let config = ReleaseConfig::parse(SAMPLE).unwrap();
        assert_eq!(
            config.repositories.release_url_for(Iteration::Milestone(1)),
            "https://repo.spring.io/libs-milestone"
        );
        assert_eq!(
            config.repositories.release_url_for(Iteration::ServiceRelease(1)),
            "https://repo.spring.io/libs-release"
        );
    }

    #[test]
    fn rejects_unknown_dependency() {
        let broken = SAMPLE.replace("dependencies = [\"build\"]", "dependencies = [\"core\"]");
        let err = ReleaseConfig::parse(&broken).unwrap_err();
        assert!(matches!(err, ReleaseError::Config(_)));
    }

    #[test]
    fn rejects_dependency_cycles() {
        let cyclic = SAMPLE.replace(
            "tracker_key = \"DATABUILD\"",
            "tracker_key = \"DATABUILD\"\ndependencies = [\"jpa\"]",
        );
        let err = ReleaseConfig::parse(&cyclic).unwrap().resolve().unwrap_err();
        assert!(err.to_string().contains("Dependency cycle"));
    }

    #[test]
    fn rejects_invalid_repository_url() {
        let broken = SAMPLE.replace(
            "https://repo.spring.io/libs-release",
            "ftp://repo.spring.io/libs-release",
        );
        assert!(ReleaseConfig::parse(&broken).is_err());
    }

    #[test]
    fn unknown_train_and_project_are_reported() {
        let model = ReleaseConfig::parse(SAMPLE).unwrap().resolve().unwrap();
        assert!(matches!(model.train("Evans"), Err(ReleaseError::UnknownTrain(_))));
        assert!(matches!(model.project("redis"), Err(ReleaseError::UnknownProject(_))));
    }
}
