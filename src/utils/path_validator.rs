use crate::error::{ReleaseError, Result};
use std::path::{Component, Path, PathBuf};

/// Path checks guarding the workspace against traversal out of project checkouts.
pub struct PathValidator;

impl PathValidator {
    /// Validates and canonicalises the workspace root directory.
    pub fn validate_workspace_root(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            ReleaseError::ProjectValidation(format!("Invalid workspace '{}': {e}", path.display()))
        })?;

        if !canonical.is_dir() {
            return Err(ReleaseError::ProjectValidation(format!(
                "Workspace '{}' is not a directory",
                canonical.display()
            )));
        }

        const FORBIDDEN: &[&str] = &["/etc", "/sys", "/proc", "/dev", "/boot"];

        for forbidden in FORBIDDEN {
            let forbidden_path = Path::new(forbidden);
            let inside = canonical.starts_with(forbidden_path)
                || forbidden_path
                    .canonicalize()
                    .is_ok_and(|resolved| canonical.starts_with(resolved));

            if inside {
                return Err(ReleaseError::ProjectValidation(format!(
                    "Workspace inside system directory '{}' is not allowed",
                    forbidden
                )));
            }
        }

        Ok(canonical)
    }

    /// Ensures a project-relative location cannot escape the project checkout.
    ///
    /// Works on the path lexically so it can be used before the file exists.
    pub fn validate_relative_location(location: impl AsRef<Path>) -> Result<PathBuf> {
        let location = location.as_ref();

        if location.as_os_str().is_empty() {
            return Err(ReleaseError::ProjectValidation(
                "Empty file location".to_string(),
            ));
        }

        for component in location.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => {
                    return Err(ReleaseError::ProjectValidation(format!(
                        "Location '{}' must stay inside the project directory",
                        location.display()
                    )));
                }
            }
        }

        Ok(location.to_path_buf())
    }
}
