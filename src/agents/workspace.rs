use crate::error::{ReleaseError, Result};
use crate::model::Project;
use crate::utils::path_validator::PathValidator;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const BUILD_GRADLE: &str = "build.gradle";

/// Local checkout directory holding one subdirectory per project repository.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = PathValidator::validate_workspace_root(root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn project_directory(&self, project: &Project) -> PathBuf {
        self.root.join(project.repository())
    }

    /// Resolves a project-relative location to a path on disk.
    pub fn file<P: AsRef<Path>>(&self, location: P, project: &Project) -> Result<PathBuf> {
        let location = PathValidator::validate_relative_location(location)?;
        Ok(self.project_directory(project).join(location))
    }

    pub fn exists<P: AsRef<Path>>(&self, location: P, project: &Project) -> bool {
        self.file(location, project)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    pub fn is_gradle_project(&self, project: &Project) -> bool {
        self.exists(BUILD_GRADLE, project)
    }

    /// Whether the file at `location` contains `needle` anywhere.
    pub fn contains<P: AsRef<Path>>(
        &self,
        location: P,
        project: &Project,
        needle: &str,
    ) -> Result<bool> {
        let path = self.existing_file(location, project)?;
        Ok(fs::read_to_string(path)?.contains(needle))
    }

    /// Rewrites the file at `location` line by line.
    ///
    /// `rewrite` receives each line (without its ending) and its 0-based index and
    /// returns the replacement, which may span several lines. Every line keeps its
    /// own ending, which also joins the lines of a block it expands into. The file
    /// is replaced atomically and only when the content changed; the return value
    /// tells whether a write happened.
    pub fn process_file<P, F>(&self, location: P, project: &Project, mut rewrite: F) -> Result<bool>
    where
        P: AsRef<Path>,
        F: FnMut(&str, usize) -> String,
    {
        let path = self.existing_file(location, project)?;
        let original = fs::read_to_string(&path)?;
        let fallback = detect_separator(&original);

        let mut updated = String::with_capacity(original.len());
        for (index, raw) in original.split_inclusive('\n').enumerate() {
            let (line, ending) = split_line_ending(raw);
            let rewritten = rewrite(line, index);
            let separator = if ending.is_empty() { fallback } else { ending };

            if rewritten.contains('\n') {
                updated.push_str(&rewritten.replace("\r\n", "\n").replace('\n', separator));
            } else {
                updated.push_str(&rewritten);
            }
            updated.push_str(ending);
        }

        if updated == original {
            return Ok(false);
        }

        write_atomically(&path, &updated)?;
        Ok(true)
    }

    /// Reads the whole file at `location`.
    pub fn read(&self, location: &str, project: &Project) -> Result<String> {
        let path = self.existing_file(location, project)?;
        Ok(fs::read_to_string(path)?)
    }

    /// Replaces the file at `location` with `content`.
    pub fn write(&self, location: &str, project: &Project, content: &str) -> Result<()> {
        let path = self.existing_file(location, project)?;
        write_atomically(&path, content)
    }

    fn existing_file<P: AsRef<Path>>(&self, location: P, project: &Project) -> Result<PathBuf> {
        let path = self.file(location, project)?;
        if !path.is_file() {
            return Err(ReleaseError::NotFound(path));
        }
        Ok(path)
    }
}

fn detect_separator(content: &str) -> &'static str {
    if content.contains("\r\n") { "\r\n" } else { "\n" }
}

fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(path)?.permissions();
    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(content.as_bytes())?;
    fs::set_permissions(file.path(), permissions)?;
    file.persist(path).map_err(|e| ReleaseError::Io(e.error))?;
    Ok(())
}
