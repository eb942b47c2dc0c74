use crate::agents::workspace::BUILD_GRADLE;
use crate::agents::{Author, VersionControl, Workspace};
use crate::config::{ReleaseConfig, ReleaseModel, RepositoriesConfig};
use crate::error::{ReleaseError, Result};
use crate::logger::{self, Logger};
use crate::model::{ModuleIteration, Phase, Project, TrainIteration};
use crate::tracker::IssueTracker;
use crate::update::report::UpdateReport;
use crate::update::rewriter::LineRewriter;

pub const GRADLE_PROPERTIES: &str = "gradle.properties";
pub const DOCS_INDEX: &str = "src/docbkx/index.xml";
pub const CHANGELOG_LOCATIONS: [&str; 2] = [
    "src/main/resources/changelog.txt",
    "docs/src/info/changelog.txt",
];
pub const NOTICE: &str = "src/main/resources/notice.txt";

const CHANGELOG_ANCHOR: char = '=';

/// Values the update operations need besides the train iteration itself.
#[derive(Debug, Clone)]
pub struct UpdateSettings {
    /// Project every other module builds against.
    pub shared_project: Project,
    /// Aggregator project without an artifact of its own; never updated.
    pub build_project: Project,
    pub gradle_property: String,
    pub changelog_message: String,
    pub repositories: RepositoriesConfig,
    pub author: Option<Author>,
}

impl UpdateSettings {
    pub fn from_config(config: &ReleaseConfig, model: &ReleaseModel) -> Result<Self> {
        Ok(Self {
            shared_project: model.project(&config.update.shared_project)?.clone(),
            build_project: model.project(&config.update.build_project)?.clone(),
            gradle_property: config.update.gradle_property.clone(),
            changelog_message: config.update.changelog_message.clone(),
            repositories: config.repositories.clone(),
            author: config.author(),
        })
    }
}

/// Applies release edits to every module of a train iteration.
///
/// Each operation checks per module whether the edit applies, rewrites the file
/// through the workspace and reports, logs and (for changelogs) commits only
/// the files that actually changed. Re-running an operation is safe.
pub struct UpdateOperations<'a> {
    workspace: &'a Workspace,
    logger: &'a dyn Logger,
    version_control: &'a dyn VersionControl,
    tracker: &'a dyn IssueTracker,
    settings: &'a UpdateSettings,
}

impl<'a> UpdateOperations<'a> {
    pub fn new(
        workspace: &'a Workspace,
        logger: &'a dyn Logger,
        version_control: &'a dyn VersionControl,
        tracker: &'a dyn IssueTracker,
        settings: &'a UpdateSettings,
    ) -> Self {
        Self {
            workspace,
            logger,
            version_control,
            tracker,
            settings,
        }
    }

    /// Gradle properties and build files together.
    pub fn update_gradle(&self, iteration: &TrainIteration, phase: Phase) -> Result<UpdateReport> {
        let mut report = self.update_gradle_properties(iteration, phase)?;
        report.merge(self.update_build_files(iteration, phase)?);
        Ok(report)
    }

    /// Points the shared-module version property at the release (prepare) or the
    /// next development version (cleanup).
    pub fn update_gradle_properties(
        &self,
        iteration: &TrainIteration,
        phase: Phase,
    ) -> Result<UpdateReport> {
        let shared = self.shared_module(iteration)?;
        let version = match phase {
            Phase::Prepare => shared.version(),
            Phase::Cleanup => shared.version().next_development_version(),
        };
        let rewriter = LineRewriter::GradleProperty {
            key: self.settings.gradle_property.clone(),
            value: version.to_string(),
        };

        let mut report = UpdateReport::new();
        for module in self.updatable_modules(iteration) {
            let project = module.project();
            if !self.workspace.is_gradle_project(project)
                || !project.depends_on(&self.settings.shared_project)
                || !self.workspace.exists(GRADLE_PROPERTIES, project)
            {
                logger::verbose(format!("{}: no shared-module property to update", module));
                continue;
            }

            let description = format!("{} = {version}", self.settings.gradle_property);
            if self.apply(module, GRADLE_PROPERTIES, &rewriter)? {
                self.logger.log(
                    &module.display(),
                    &format!("Updated {GRADLE_PROPERTIES}: {description}"),
                );
                report.add(module.display(), GRADLE_PROPERTIES, description);
            }
        }

        Ok(report)
    }

    /// Switches the repository URL in `build.gradle` for the phase.
    pub fn update_build_files(
        &self,
        iteration: &TrainIteration,
        phase: Phase,
    ) -> Result<UpdateReport> {
        let repositories = &self.settings.repositories;
        let release_url = repositories.release_url_for(iteration.iteration());
        let rewriter = LineRewriter::repository_url(phase, &repositories.snapshot, release_url);
        let target = match phase {
            Phase::Prepare => release_url,
            Phase::Cleanup => repositories.snapshot.as_str(),
        };

        let mut report = UpdateReport::new();
        for module in self.updatable_modules(iteration) {
            if !self.workspace.is_gradle_project(module.project()) {
                continue;
            }

            if self.apply(module, BUILD_GRADLE, &rewriter)? {
                self.logger.log(
                    &module.display(),
                    &format!("Switched {BUILD_GRADLE} repository to {target}"),
                );
                report.add(module.display(), BUILD_GRADLE, format!("repository {target}"));
            }
        }

        Ok(report)
    }

    /// Moves documentation includes of the shared project from the previous
    /// iteration's tag to the current one.
    pub fn update_docs_index(&self, iteration: &TrainIteration) -> Result<UpdateReport> {
        let mut report = UpdateReport::new();
        let shared = self.shared_module(iteration)?;

        let Some(previous) = iteration.previous() else {
            self.logger.warn(
                &iteration.to_string(),
                "No previous iteration, documentation includes left unchanged",
            );
            return Ok(report);
        };
        let previous_shared = self.shared_module(&previous)?;

        let rewriter = LineRewriter::DocsInclude {
            repository: self.settings.shared_project.repository().to_string(),
            previous_tag: previous_shared.release_tag(),
            current_tag: shared.release_tag(),
        };

        for module in self.updatable_modules(iteration) {
            let project = module.project();
            if !project.depends_on(&self.settings.shared_project)
                || !self.workspace.exists(DOCS_INDEX, project)
            {
                continue;
            }

            if self.apply(module, DOCS_INDEX, &rewriter)? {
                let description = format!(
                    "{} includes {} -> {}",
                    self.settings.shared_project.repository(),
                    previous_shared.release_tag(),
                    shared.release_tag()
                );
                self.logger
                    .log(&module.display(), &format!("Updated {DOCS_INDEX}: {description}"));
                report.add(module.display(), DOCS_INDEX, description);
            }
        }

        Ok(report)
    }

    /// Inserts each module's changelog below the changelog file's header and
    /// commits the file.
    pub fn update_changelog(&self, iteration: &TrainIteration) -> Result<UpdateReport> {
        let mut report = UpdateReport::new();

        for module in self.updatable_modules(iteration) {
            let project = module.project();
            let Some(location) = CHANGELOG_LOCATIONS
                .into_iter()
                .find(|location| self.workspace.exists(location, project))
            else {
                logger::verbose(format!("{module}: no changelog file"));
                continue;
            };

            let changelog = self
                .tracker
                .changelog_for(module)
                .map_err(|e| e.in_module(module.display()))?;

            if self
                .workspace
                .contains(location, project, &changelog.marker())
                .map_err(|e| e.in_module(module.display()))?
            {
                self.logger.log(
                    &module.display(),
                    &format!("Changelog already contains {}", module.version()),
                );
                continue;
            }

            let original = self
                .workspace
                .read(location, project)
                .map_err(|e| e.in_module(module.display()))?;
            let rewriter = LineRewriter::InsertAfterAnchor {
                anchor: CHANGELOG_ANCHOR,
                block: changelog.to_string(),
            };
            if !self.apply(module, location, &rewriter)? {
                continue;
            }

            let tickets = changelog.tickets().len();
            self.logger.log(
                &module.display(),
                &format!("Added changelog with {tickets} ticket(s) to {location}"),
            );

            let file = self.workspace.file(location, project)?;
            if let Err(e) = self.version_control.commit(
                module,
                &self.settings.changelog_message,
                self.settings.author.as_ref(),
                &[file],
            ) {
                // An uncommitted changelog would be skipped on the next run.
                self.workspace.write(location, project, &original)?;
                return Err(e.in_module(module.display()));
            }
            self.logger
                .log(&module.display(), &format!("Committed {location}"));

            report.add(module.display(), location, format!("{tickets} ticket(s)"));
        }

        Ok(report)
    }

    /// Replaces the banner line of each module's notice file.
    pub fn update_notice(&self, iteration: &TrainIteration) -> Result<UpdateReport> {
        let mut report = UpdateReport::new();

        for module in self.updatable_modules(iteration) {
            if !self.workspace.exists(NOTICE, module.project()) {
                continue;
            }

            let rewriter = LineRewriter::FirstLine {
                replacement: module.display(),
            };
            if self.apply(module, NOTICE, &rewriter)? {
                self.logger
                    .log(&module.display(), &format!("Updated {NOTICE} banner"));
                report.add(module.display(), NOTICE, module.display());
            }
        }

        Ok(report)
    }

    /// Everything a phase needs: build settings always, documentation, notice
    /// and changelog only when preparing a release.
    pub fn update_all(&self, iteration: &TrainIteration, phase: Phase) -> Result<UpdateReport> {
        let mut report = self.update_gradle(iteration, phase)?;
        if phase == Phase::Prepare {
            report.merge(self.update_docs_index(iteration)?);
            report.merge(self.update_notice(iteration)?);
            report.merge(self.update_changelog(iteration)?);
        }
        Ok(report)
    }

    fn updatable_modules<'i>(
        &'i self,
        iteration: &'i TrainIteration,
    ) -> impl Iterator<Item = &'i ModuleIteration> + 'i {
        iteration.modules_except(&self.settings.build_project)
    }

    fn shared_module<'i>(&self, iteration: &'i TrainIteration) -> Result<&'i ModuleIteration> {
        iteration
            .module(&self.settings.shared_project)
            .ok_or_else(|| {
                ReleaseError::Config(format!(
                    "Train {} has no module for {}",
                    iteration.train(),
                    self.settings.shared_project.key()
                ))
            })
    }

    fn apply(
        &self,
        module: &ModuleIteration,
        location: &str,
        rewriter: &LineRewriter,
    ) -> Result<bool> {
        self.workspace
            .process_file(location, module.project(), |line, index| {
                rewriter.apply(line, index)
            })
            .map_err(|e| e.in_module(module.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Iteration, Module, Train};
    use crate::testing::{
        FakeTracker, FakeVersionControl, RecordingLogger, sample_config, sample_model,
    };
    use crate::tracker::Ticket;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    const SNAPSHOT: &str = "https://repo.spring.io/libs-snapshot";
    const MILESTONE: &str = "https://repo.spring.io/libs-milestone";
    const RELEASE: &str = "https://repo.spring.io/libs-release";

    struct Fixture {
        dir: TempDir,
        workspace: Workspace,
        settings: UpdateSettings,
        logger: RecordingLogger,
        model: ReleaseModel,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempdir().unwrap();
            let workspace = Workspace::new(dir.path()).unwrap();
            let config = sample_config();
            let model = sample_model();
            let settings = UpdateSettings::from_config(&config, &model).unwrap();
            Self {
                dir,
                workspace,
                settings,
                logger: RecordingLogger::default(),
                model,
            }
        }

        fn write(&self, repository: &str, location: &str, content: &str) {
            let path = self.dir.path().join(repository).join(location);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        fn read(&self, repository: &str, location: &str) -> String {
            fs::read_to_string(self.dir.path().join(repository).join(location)).unwrap()
        }

        fn iteration(&self, name: &str) -> TrainIteration {
            let train = self.model.train("Dijkstra").unwrap();
            train.at(train.iteration(name).unwrap()).unwrap()
        }

        fn operations<'a>(
            &'a self,
            version_control: &'a FakeVersionControl,
            tracker: &'a FakeTracker,
        ) -> UpdateOperations<'a> {
            UpdateOperations::new(
                &self.workspace,
                &self.logger,
                version_control,
                tracker,
                &self.settings,
            )
        }

        fn gradle_project(&self, repository: &str, commons_version: &str) {
            self.write(
                repository,
                BUILD_GRADLE,
                &format!("repositories {{\n    maven {{ url \"{SNAPSHOT}\" }}\n}}\n"),
            );
            self.write(
                repository,
                GRADLE_PROPERTIES,
                &format!("version=1.0\nspringDataCommonsVersion={commons_version}\n"),
            );
        }
    }

    #[test]
    fn prepare_sets_shared_version_in_dependent_gradle_projects() {
        let fixture = Fixture::new();
        fixture.gradle_project("spring-data-neo4j", "1.8.0.BUILD-SNAPSHOT");
        fixture.gradle_project("spring-data-build", "1.8.0.BUILD-SNAPSHOT");
        fixture.write("spring-data-jpa", "pom.xml", "<project/>\n");

        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::default());
        let report = fixture
            .operations(&vcs, &tracker)
            .update_gradle_properties(&fixture.iteration("RC1"), Phase::Prepare)
            .unwrap();

        assert_eq!(
            fixture.read("spring-data-neo4j", GRADLE_PROPERTIES),
            "version=1.0\nspringDataCommonsVersion=1.8.0.RC1\n"
        );
        assert_eq!(
            fixture.read("spring-data-build", GRADLE_PROPERTIES),
            "version=1.0\nspringDataCommonsVersion=1.8.0.BUILD-SNAPSHOT\n"
        );
        assert_eq!(report.total_updates(), 1);
        assert_eq!(report.updates()[0].module, "Spring Data Neo4j 3.1 RC1");
    }

    #[test]
    fn cleanup_sets_next_development_version() {
        let fixture = Fixture::new();
        fixture.gradle_project("spring-data-neo4j", "1.8.0.RELEASE");

        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::default());
        fixture
            .operations(&vcs, &tracker)
            .update_gradle_properties(&fixture.iteration("GA"), Phase::Cleanup)
            .unwrap();

        assert!(
            fixture
                .read("spring-data-neo4j", GRADLE_PROPERTIES)
                .contains("springDataCommonsVersion=1.8.1.BUILD-SNAPSHOT")
        );
    }

    #[test]
    fn build_file_switches_repositories_by_phase() {
        let fixture = Fixture::new();
        fixture.gradle_project("spring-data-neo4j", "1.8.0.BUILD-SNAPSHOT");
        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::default());
        let operations = fixture.operations(&vcs, &tracker);
        let rc1 = fixture.iteration("RC1");

        operations.update_build_files(&rc1, Phase::Prepare).unwrap();
        assert!(fixture.read("spring-data-neo4j", BUILD_GRADLE).contains(MILESTONE));

        operations.update_build_files(&rc1, Phase::Cleanup).unwrap();
        assert!(fixture.read("spring-data-neo4j", BUILD_GRADLE).contains(SNAPSHOT));

        operations
            .update_build_files(&fixture.iteration("GA"), Phase::Prepare)
            .unwrap();
        assert!(fixture.read("spring-data-neo4j", BUILD_GRADLE).contains(RELEASE));
    }

    #[test]
    fn rerunning_gradle_update_writes_nothing() {
        let fixture = Fixture::new();
        fixture.gradle_project("spring-data-neo4j", "1.8.0.BUILD-SNAPSHOT");
        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::default());
        let operations = fixture.operations(&vcs, &tracker);
        let ga = fixture.iteration("GA");

        let first = operations.update_gradle(&ga, Phase::Prepare).unwrap();
        let logged = fixture.logger.messages().len();
        let second = operations.update_gradle(&ga, Phase::Prepare).unwrap();

        assert_eq!(first.total_updates(), 2);
        assert!(second.is_empty());
        assert_eq!(fixture.logger.messages().len(), logged);
    }

    #[test]
    fn docs_index_moves_shared_includes_to_current_tag() {
        let fixture = Fixture::new();
        let include = |tag: &str| {
            format!(
                "<xi:include href=\"https://raw.github.com/spring-projects/spring-data-commons/{tag}/src/docbkx/repositories.xml\"/>"
            )
        };
        fixture.write(
            "spring-data-jpa",
            DOCS_INDEX,
            &format!("<book>\n{}\n<para>1.8.0.RC1</para>\n</book>\n", include("1.8.0.RC1")),
        );

        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::default());
        let report = fixture
            .operations(&vcs, &tracker)
            .update_docs_index(&fixture.iteration("GA"))
            .unwrap();

        assert_eq!(
            fixture.read("spring-data-jpa", DOCS_INDEX),
            format!(
                "<book>\n{}\n<para>1.8.0.RC1</para>\n</book>\n",
                include("1.8.0.RELEASE")
            )
        );
        assert_eq!(report.total_updates(), 1);
    }

    #[test]
    fn docs_index_without_previous_iteration_is_skipped() {
        let fixture = Fixture::new();
        fixture.write("spring-data-jpa", DOCS_INDEX, "<xi:include spring-data-commons/>\n");

        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::default());
        let report = fixture
            .operations(&vcs, &tracker)
            .update_docs_index(&fixture.iteration("M1"))
            .unwrap();

        assert!(report.is_empty());
        assert_eq!(fixture.logger.messages().len(), 1);
    }

    #[test]
    fn changelog_is_inserted_and_committed_once() {
        let fixture = Fixture::new();
        fixture.write(
            "spring-data-jpa",
            CHANGELOG_LOCATIONS[1],
            "Spring Data JPA Changelog\n=========================\n\nChanges in version 1.6.0.M1 (2014-03-31)\n",
        );
        let vcs = FakeVersionControl::default();
        let tracker = FakeTracker::default()
            .with_tickets("jpa", vec![Ticket::new("DATAJPA-1", "Support Java 8 streams")]);
        let operations = fixture.operations(&vcs, &tracker);
        let rc1 = fixture.iteration("RC1");

        let report = operations.update_changelog(&rc1).unwrap();
        let again = operations.update_changelog(&rc1).unwrap();

        assert_eq!(
            fixture.read("spring-data-jpa", CHANGELOG_LOCATIONS[1]),
            "Spring Data JPA Changelog\n\
             =========================\n\
             \n\
             Changes in version 1.6.0.RC1 (2014-08-13)\n\
             -----------------------------------------\n\
             * DATAJPA-1 - Support Java 8 streams.\n\
             \n\
             Changes in version 1.6.0.M1 (2014-03-31)\n"
        );
        assert_eq!(report.total_updates(), 1);
        assert!(again.is_empty());

        let commits = vcs.commits();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "Updated changelog.");
        assert_eq!(commits[0].author.as_ref().unwrap().email, "release@example.org");
        let jpa = fixture.model.project("jpa").unwrap();
        assert_eq!(
            commits[0].files,
            vec![fixture.workspace.file(CHANGELOG_LOCATIONS[1], jpa).unwrap()]
        );
    }

    #[test]
    fn commit_failure_names_the_module() {
        let fixture = Fixture::new();
        fixture.write("spring-data-jpa", CHANGELOG_LOCATIONS[0], "JPA\n===\n");
        let vcs = FakeVersionControl::failing();
        let tracker = FakeTracker::default();

        let err = fixture
            .operations(&vcs, &tracker)
            .update_changelog(&fixture.iteration("RC1"))
            .unwrap_err();

        assert!(matches!(err, ReleaseError::Module { .. }));
        assert!(err.to_string().starts_with("Spring Data JPA 1.6 RC1"));
    }

    #[test]
    fn failed_commit_restores_changelog_for_the_next_run() {
        let fixture = Fixture::new();
        fixture.write("spring-data-jpa", CHANGELOG_LOCATIONS[0], "JPA\n===\n");
        let tracker = FakeTracker::default();
        let rc1 = fixture.iteration("RC1");

        let failing = FakeVersionControl::failing();
        assert!(fixture.operations(&failing, &tracker).update_changelog(&rc1).is_err());
        assert_eq!(fixture.read("spring-data-jpa", CHANGELOG_LOCATIONS[0]), "JPA\n===\n");

        let vcs = FakeVersionControl::default();
        let report = fixture.operations(&vcs, &tracker).update_changelog(&rc1).unwrap();

        assert_eq!(report.total_updates(), 1);
        assert_eq!(vcs.commits().len(), 1);
        assert!(
            fixture
                .read("spring-data-jpa", CHANGELOG_LOCATIONS[0])
                .contains("Changes in version 1.6.0.RC1 (2014-08-13)")
        );
    }

    #[test]
    fn earlier_iteration_with_longer_name_does_not_hide_changelog() {
        let fixture = Fixture::new();
        fixture.write(
            "spring-data-jpa",
            CHANGELOG_LOCATIONS[0],
            "JPA\n===\n\nChanges in version 1.6.0.RC10 (2014-07-01)\n",
        );
        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::default());

        let report = fixture
            .operations(&vcs, &tracker)
            .update_changelog(&fixture.iteration("RC1"))
            .unwrap();

        assert_eq!(report.total_updates(), 1);
        assert_eq!(vcs.commits().len(), 1);
    }

    #[test]
    fn tracker_failure_leaves_changelog_untouched() {
        let fixture = Fixture::new();
        fixture.write("spring-data-jpa", CHANGELOG_LOCATIONS[0], "JPA\n===\n");
        let vcs = FakeVersionControl::default();
        let tracker = FakeTracker::unavailable();

        let result = fixture
            .operations(&vcs, &tracker)
            .update_changelog(&fixture.iteration("RC1"));

        assert!(result.is_err());
        assert_eq!(fixture.read("spring-data-jpa", CHANGELOG_LOCATIONS[0]), "JPA\n===\n");
        assert!(vcs.commits().is_empty());
    }

    #[test]
    fn notice_banner_reflects_module_version() {
        let fixture = Fixture::new();
        fixture.write(
            "spring-data-commons",
            NOTICE,
            "Spring Data Commons 1.8 RC1\nCopyright (c) [2010-2014] Pivotal Software, Inc.\n",
        );
        fixture.write("spring-data-build", NOTICE, "Spring Data Build 1.4 RC1\n");

        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::default());
        let report = fixture
            .operations(&vcs, &tracker)
            .update_notice(&fixture.iteration("GA"))
            .unwrap();

        assert_eq!(
            fixture.read("spring-data-commons", NOTICE),
            "Spring Data Commons 1.8 GA\nCopyright (c) [2010-2014] Pivotal Software, Inc.\n"
        );
        assert_eq!(fixture.read("spring-data-build", NOTICE), "Spring Data Build 1.4 RC1\n");
        assert_eq!(report.total_updates(), 1);
    }

    #[test]
    fn cleanup_only_touches_build_settings() {
        let fixture = Fixture::new();
        fixture.gradle_project("spring-data-neo4j", "1.8.0.RELEASE");
        fixture.write("spring-data-neo4j", NOTICE, "Spring Data Neo4j 3.1 RC1\n");

        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::unavailable());
        let report = fixture
            .operations(&vcs, &tracker)
            .update_all(&fixture.iteration("GA"), Phase::Cleanup)
            .unwrap();

        assert_eq!(report.total_updates(), 1);
        assert_eq!(report.updates()[0].file, GRADLE_PROPERTIES);
        assert_eq!(fixture.read("spring-data-neo4j", NOTICE), "Spring Data Neo4j 3.1 RC1\n");
    }

    #[test]
    fn missing_shared_module_is_a_configuration_error() {
        let fixture = Fixture::new();
        let jpa = fixture.model.project("jpa").unwrap().clone();
        let modules = vec![Module::parse(jpa, "1.6").unwrap()];
        let train = Train::new("Lonely", modules, vec![Iteration::GA]);
        let (vcs, tracker) = (FakeVersionControl::default(), FakeTracker::default());

        let err = fixture
            .operations(&vcs, &tracker)
            .update_gradle_properties(&train.at(Iteration::GA).unwrap(), Phase::Prepare)
            .unwrap_err();

        assert!(matches!(err, ReleaseError::Config(_)));
    }
}
