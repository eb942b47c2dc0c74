use crate::error::{ReleaseError, Result};
use crate::logger;
use crate::model::{ModuleIteration, Project};
use crate::tracker::TicketReference;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Commit author used for release commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    fn as_git_argument(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

/// A branch dedicated to one ticket, named `issue/<TICKET-ID>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketBranch {
    pub name: String,
    pub ticket_id: String,
    pub remote: bool,
}

/// All ticket branches found in one project repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketBranches {
    pub project: Project,
    pub branches: Vec<TicketBranch>,
}

impl TicketBranches {
    pub fn ticket_ids(&self) -> Vec<String> {
        self.branches.iter().map(|b| b.ticket_id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

/// Version control operations the release tooling relies on.
pub trait VersionControl: Send + Sync {
    /// Commits exactly `files` of the module's repository.
    fn commit(
        &self,
        module: &ModuleIteration,
        message: &str,
        author: Option<&Author>,
        files: &[PathBuf],
    ) -> Result<()>;

    fn list_ticket_branches(&self, project: &Project) -> Result<TicketBranches>;

    /// Ticket ids mentioned in commits after `from`'s release tag up to `to`'s
    /// tag (or `HEAD` while `to` is not tagged yet). Without `from` the whole
    /// history up to `to` is scanned.
    fn ticket_references_between(
        &self,
        project: &Project,
        from: Option<&ModuleIteration>,
        to: &ModuleIteration,
    ) -> Result<Vec<TicketReference>>;
}

/// `VersionControl` backed by the `git` binary, one repository per project.
pub struct GitAgent {
    workspace_root: PathBuf,
}

impl GitAgent {
    pub fn new<P: AsRef<Path>>(workspace_root: P) -> Result<Self> {
        let workspace_root = Self::validate_git_path(workspace_root.as_ref())?;
        Ok(Self { workspace_root })
    }

    fn repository(&self, project: &Project) -> PathBuf {
        self.workspace_root.join(project.repository())
    }

    /// Check if the project's working directory is clean
    pub fn is_working_directory_clean(&self, project: &Project) -> Result<bool> {
        let output = self.run_git(project, &["status", "--porcelain"])?;
        Self::ensure_success(&output, "git status")?;
        Ok(output.stdout.is_empty())
    }

    fn tag_exists(&self, project: &Project, tag: &str) -> Result<bool> {
        let reference = format!("refs/tags/{tag}");
        let output = self.run_git(project, &["rev-parse", "--verify", "--quiet", &reference])?;
        Ok(output.status.success())
    }

    fn relative_paths(&self, project: &Project, files: &[PathBuf]) -> Result<Vec<String>> {
        let repository = self.repository(project);
        files
            .iter()
            .map(|file| {
                let relative = if file.is_absolute() {
                    file.strip_prefix(&repository).map_err(|_| {
                        ReleaseError::GitOperation(format!(
                            "Refusing to commit '{}' outside of {}",
                            file.display(),
                            repository.display()
                        ))
                    })?
                } else {
                    file.as_path()
                };
                Ok(relative.to_string_lossy().into_owned())
            })
            .collect()
    }

    fn run_git(&self, project: &Project, args: &[&str]) -> Result<Output> {
        let directory = self.repository(project);
        logger::verbose(format!("{}: git {}", directory.display(), args.join(" ")));

        Command::new("git")
            .current_dir(&directory)
            .args(args)
            .output()
            .map_err(|e| {
                ReleaseError::GitOperation(format!(
                    "Failed to execute git command '{}' in {}: {e}",
                    args.join(" "),
                    directory.display()
                ))
            })
    }

    fn ensure_success(output: &Output, command: &str) -> Result<()> {
        if output.status.success() {
            return Ok(());
        }

        Err(ReleaseError::GitOperation(format!(
            "{} failed: {}",
            command,
            String::from_utf8_lossy(&output.stderr).trim()
        )))
    }

    fn validate_git_path(path: &Path) -> Result<PathBuf> {
        let dangerous = [';', '|', '&', '$', '`', '\n', '\r'];
        let path_str = path.to_string_lossy();
        if let Some(ch) = dangerous.iter().find(|c| path_str.contains(**c)) {
            return Err(ReleaseError::GitOperation(format!(
                "Path contains dangerous character: '{}'",
                ch
            )));
        }

        if !path.is_absolute() {
            return Err(ReleaseError::GitOperation(
                "Only absolute paths are allowed for Git operations".to_string(),
            ));
        }

        Ok(path.to_path_buf())
    }
}

impl VersionControl for GitAgent {
    fn commit(
        &self,
        module: &ModuleIteration,
        message: &str,
        author: Option<&Author>,
        files: &[PathBuf],
    ) -> Result<()> {
        let project = module.project();
        let paths = self.relative_paths(project, files)?;

        let mut add = vec!["add", "--"];
        add.extend(paths.iter().map(String::as_str));
        let output = self.run_git(project, &add)?;
        Self::ensure_success(&output, "git add")?;

        let author_argument = author.map(Author::as_git_argument);
        let mut commit = vec!["commit", "-m", message];
        if let Some(author) = &author_argument {
            commit.push("--author");
            commit.push(author);
        }
        commit.push("--");
        commit.extend(paths.iter().map(String::as_str));

        let output = self.run_git(project, &commit)?;
        Self::ensure_success(&output, "git commit")
    }

    fn list_ticket_branches(&self, project: &Project) -> Result<TicketBranches> {
        let output = self.run_git(project, &["branch", "-a", "--format=%(refname)"])?;
        Self::ensure_success(&output, "git branch")?;

        let listing = String::from_utf8_lossy(&output.stdout);
        Ok(TicketBranches {
            project: project.clone(),
            branches: parse_ticket_branches(project, &listing)?,
        })
    }

    fn ticket_references_between(
        &self,
        project: &Project,
        from: Option<&ModuleIteration>,
        to: &ModuleIteration,
    ) -> Result<Vec<TicketReference>> {
        let to_tag = to.release_tag();
        let end = if self.tag_exists(project, &to_tag)? {
            to_tag
        } else {
            "HEAD".to_string()
        };

        let range = match from {
            Some(from) => format!("{}..{end}", from.release_tag()),
            None => end,
        };

        let output = self.run_git(project, &["log", "--format=%s%n%b", &range])?;
        Self::ensure_success(&output, "git log")?;

        parse_ticket_references(project, &String::from_utf8_lossy(&output.stdout))
    }
}

fn ticket_pattern(project: &Project) -> Result<Regex> {
    Regex::new(&format!(r"\b{}-\d+\b", regex::escape(project.tracker_key())))
        .map_err(|e| ReleaseError::GitOperation(format!("Regex error: {e}")))
}

/// Extracts ticket branches from `git branch -a --format=%(refname)` output.
/// A ticket with both a local and a remote branch is reported once, as local.
pub fn parse_ticket_branches(project: &Project, listing: &str) -> Result<Vec<TicketBranch>> {
    let pattern = ticket_pattern(project)?;
    let mut branches: Vec<TicketBranch> = Vec::new();

    for reference in listing.lines().map(str::trim) {
        let (name, remote) = if let Some(local) = reference.strip_prefix("refs/heads/") {
            (local, false)
        } else if let Some(remote) = reference.strip_prefix("refs/remotes/") {
            match remote.split_once('/') {
                Some((_, name)) => (name, true),
                None => continue,
            }
        } else {
            continue;
        };

        let Some(ticket) = name.strip_prefix("issue/") else {
            continue;
        };
        if !pattern.find(ticket).is_some_and(|m| m.as_str() == ticket) {
            continue;
        }

        match branches.iter_mut().find(|b| b.ticket_id == ticket) {
            Some(existing) => existing.remote &= remote,
            None => branches.push(TicketBranch {
                name: name.to_string(),
                ticket_id: ticket.to_string(),
                remote,
            }),
        }
    }

    Ok(branches)
}

/// Collects the distinct ticket ids of `project` mentioned in a commit log.
pub fn parse_ticket_references(project: &Project, log: &str) -> Result<Vec<TicketReference>> {
    let pattern = ticket_pattern(project)?;
    let references: BTreeSet<TicketReference> = pattern
        .find_iter(log)
        .map(|m| TicketReference::new(m.as_str()))
        .collect();
    Ok(references.into_iter().collect())
}
