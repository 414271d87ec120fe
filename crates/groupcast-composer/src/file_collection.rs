//! Files staged for attachment.

use groupcast_core::FileDescriptor;

/// Ordered set of staged files.
///
/// Insertion order is display and upload order. No two entries share the
/// same `(name, size)` pair.
#[derive(Debug, Clone, Default)]
pub struct FileCollection {
    files: Vec<FileDescriptor>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append each candidate unless an entry with the same name and size is
    /// already staged. Duplicates are skipped silently. Returns how many
    /// files were added.
    pub fn add<I>(&mut self, files: I) -> usize
    where
        I: IntoIterator<Item = FileDescriptor>,
    {
        let before = self.files.len();
        for file in files {
            if self.files.iter().any(|staged| staged.same_file(&file)) {
                tracing::debug!(name = %file.name(), size = file.size(), "Skipping duplicate file");
                continue;
            }
            self.files.push(file);
        }
        self.files.len() - before
    }

    /// Remove the entry at `index`, shifting later entries down.
    ///
    /// Indices come from the rendered list, so an out-of-range index means
    /// the caller rendered stale state; it is logged and ignored.
    pub fn remove(&mut self, index: usize) -> Option<FileDescriptor> {
        if index >= self.files.len() {
            tracing::warn!(index, len = self.files.len(), "Remove index out of range");
            return None;
        }
        Some(self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn list(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Owned copy for a submission; shares file contents.
    pub fn snapshot(&self) -> Vec<FileDescriptor> {
        self.files.clone()
    }
}
