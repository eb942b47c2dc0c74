use crate::model::Phase;

/// Marker identifying documentation include directives in `index.xml`.
const INCLUDE_DIRECTIVE: &str = "xi:include";

/// Per-line rewrite rules applied by the update operations.
///
/// Each rule is bound to the values computed for one module and is pure: the
/// output depends only on the line and its index. Lines a rule does not target
/// come back unchanged, and applying a rule to its own output changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRewriter {
    /// Replaces any line mentioning `key` with `key=value`.
    GradleProperty { key: String, value: String },
    /// Replaces occurrences of the `from` repository URL with `to`.
    RepositoryUrl { from: String, to: String },
    /// Swaps `previous_tag` for `current_tag` in include directives referencing
    /// `repository`.
    DocsInclude {
        repository: String,
        previous_tag: String,
        current_tag: String,
    },
    /// Appends a blank line and `block` after every line starting with `anchor`.
    InsertAfterAnchor { anchor: char, block: String },
    /// Replaces the first line of the file.
    FirstLine { replacement: String },
}

impl LineRewriter {
    /// URL rewrite for the given phase: prepare moves builds from the snapshot
    /// repository to `release_url`, cleanup moves them back.
    pub fn repository_url(phase: Phase, snapshot_url: &str, release_url: &str) -> Self {
        let (from, to) = match phase {
            Phase::Prepare => (snapshot_url, release_url),
            Phase::Cleanup => (release_url, snapshot_url),
        };
        LineRewriter::RepositoryUrl {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn apply(&self, line: &str, index: usize) -> String {
        match self {
            LineRewriter::GradleProperty { key, value } => {
                if line.contains(key.as_str()) {
                    format!("{key}={value}")
                } else {
                    line.to_string()
                }
            }
            LineRewriter::RepositoryUrl { from, to } => {
                if !from.is_empty() && line.contains(from.as_str()) && !line.contains(to.as_str()) {
                    line.replace(from.as_str(), to)
                } else {
                    line.to_string()
                }
            }
            LineRewriter::DocsInclude {
                repository,
                previous_tag,
                current_tag,
            } => {
                if line.contains(INCLUDE_DIRECTIVE) && line.contains(repository.as_str()) {
                    line.replace(previous_tag.as_str(), current_tag)
                } else {
                    line.to_string()
                }
            }
            LineRewriter::InsertAfterAnchor { anchor, block } => {
                if line.starts_with(*anchor) {
                    format!("{line}\n\n{block}")
                } else {
                    line.to_string()
                }
            }
            LineRewriter::FirstLine { replacement } => {
                if index == 0 {
                    replacement.clone()
                } else {
                    line.to_string()
                }
            }
        }
    }
}
