/// One file rewritten by an update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub module: String,
    pub file: String,
    pub description: String,
}

/// Tracks the files changed during an update run, in the order they changed.
#[derive(Debug, Clone, Default)]
pub struct UpdateReport {
    updates: Vec<FileUpdate>,
}

impl UpdateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        module: impl Into<String>,
        file: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.updates.push(FileUpdate {
            module: module.into(),
            file: file.into(),
            description: description.into(),
        });
    }

    pub fn merge(&mut self, other: UpdateReport) {
        self.updates.extend(other.updates);
    }

    pub fn updates(&self) -> &[FileUpdate] {
        &self.updates
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn total_updates(&self) -> usize {
        self.updates.len()
    }
}
