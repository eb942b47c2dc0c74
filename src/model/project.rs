use std::fmt;
use std::hash::{Hash, Hasher};

/// One sibling repository of the project family.
///
/// Identity is the key; the remaining fields are descriptive.
#[derive(Debug, Clone)]
pub struct Project {
    key: String,
    full_name: String,
    repository: String,
    tracker_key: String,
    dependencies: Vec<Project>,
}

impl Project {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        repository: impl Into<String>,
        tracker_key: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            full_name: name.into(),
            repository: repository.into(),
            tracker_key: tracker_key.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<Project>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Directory name of the project's checkout inside the workspace.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn tracker_key(&self) -> &str {
        &self.tracker_key
    }

    /// Whether `other` is a direct or transitive dependency of this project.
    pub fn depends_on(&self, other: &Project) -> bool {
        self.dependencies
            .iter()
            .any(|dependency| dependency == other || dependency.depends_on(other))
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Project {}

impl Hash for Project {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commons() -> Project {
        Project::new("commons", "Commons", "spring-data-commons", "DATACMNS")
    }

    #[test]
    fn resolves_direct_and_transitive_dependencies() {
        let jpa = Project::new("jpa", "JPA", "spring-data-jpa", "DATAJPA")
            .with_dependencies(vec![commons()]);
        let envers = Project::new("envers", "Envers", "spring-data-envers", "DATAENV")
            .with_dependencies(vec![jpa.clone()]);

        assert!(jpa.depends_on(&commons()));
        assert!(envers.depends_on(&commons()));
        assert!(!commons().depends_on(&jpa));
    }

    #[test]
    fn identity_is_the_key() {
        let renamed = commons().with_full_name("Spring Data Commons");
        assert_eq!(renamed, commons());
        assert_eq!(renamed.to_string(), "Spring Data Commons");
        assert_eq!(commons().to_string(), "Commons");
    }
}
