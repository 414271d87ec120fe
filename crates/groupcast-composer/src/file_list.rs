//! Projection of the staged files into a removable, categorized list.

use groupcast_core::{format_file_size, FileDescriptor, MediaCategory};

/// One row of the selected-files list. `index` is what the row's remove
/// control hands back to [`FileCollection::remove`](crate::FileCollection::remove).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListItem {
    pub index: usize,
    pub name: String,
    pub size_label: String,
    pub category: MediaCategory,
    pub icon: &'static str,
}

/// Render every staged file, in staging order.
pub fn render_file_list(files: &[FileDescriptor]) -> Vec<FileListItem> {
    files
        .iter()
        .enumerate()
        .map(|(index, file)| {
            let category = file.category();
            FileListItem {
                index,
                name: file.name().to_string(),
                size_label: format_file_size(file.size()),
                category,
                icon: category.icon(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn renders_rows_with_category_and_size() {
        let files = vec![
            FileDescriptor::from_bytes("photo.png", vec![0u8; 1536]),
            FileDescriptor::from_bytes("clip.mp4", vec![0u8; 10]),
            FileDescriptor::new("voice.ogg", "audio/ogg", Bytes::from_static(b"x")),
            FileDescriptor::from_bytes("notes.docx", Vec::new()),
        ];

        let rows = render_file_list(&files);
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].index, 0);
        assert_eq!(rows[0].name, "photo.png");
        assert_eq!(rows[0].size_label, "1.5 KB");
        assert_eq!(rows[0].category, MediaCategory::Image);
        assert_eq!(rows[0].icon, "🖼️");

        assert_eq!(rows[1].category, MediaCategory::Video);
        assert_eq!(rows[1].size_label, "10 Bytes");
        assert_eq!(rows[2].category, MediaCategory::Audio);
        assert_eq!(rows[3].category, MediaCategory::Document);
        assert_eq!(rows[3].size_label, "0 Bytes");
        assert_eq!(rows[3].index, 3);
    }

    #[test]
    fn renders_empty_list() {
        assert!(render_file_list(&[]).is_empty());
    }
}
