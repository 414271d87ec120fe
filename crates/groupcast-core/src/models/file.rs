use bytes::Bytes;
use serde::{Deserialize, Serialize};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Visual category of an attachment, derived from its MIME type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Image,
    Video,
    Audio,
    Document,
}

impl MediaCategory {
    /// `image/*`, `video/*` and `audio/*` map to their category; anything
    /// else, including an empty type, is a document.
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.starts_with("image/") {
            MediaCategory::Image
        } else if mime_type.starts_with("video/") {
            MediaCategory::Video
        } else if mime_type.starts_with("audio/") {
            MediaCategory::Audio
        } else {
            MediaCategory::Document
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Image => "image",
            MediaCategory::Video => "video",
            MediaCategory::Audio => "audio",
            MediaCategory::Document => "document",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MediaCategory::Image => "🖼️",
            MediaCategory::Video => "🎥",
            MediaCategory::Audio => "🎵",
            MediaCategory::Document => "📄",
        }
    }
}

/// A file selected for attachment. Immutable once created; clones share the
/// underlying bytes.
#[derive(Debug, Clone)]
pub struct FileDescriptor {
    name: String,
    mime_type: String,
    content: Bytes,
}

impl FileDescriptor {
    /// Create a descriptor with an explicit MIME type. An empty type is
    /// replaced by a guess from the file name.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Bytes) -> Self {
        let name = name.into();
        let mut mime_type = mime_type.into();
        if mime_type.trim().is_empty() {
            mime_type = guess_mime_type(&name);
        }
        Self {
            name,
            mime_type,
            content,
        }
    }

    /// Create a descriptor whose MIME type is guessed from the file name.
    pub fn from_bytes(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let name = name.into();
        let mime_type = guess_mime_type(&name);
        Self {
            name,
            mime_type,
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn category(&self) -> MediaCategory {
        MediaCategory::from_mime(&self.mime_type)
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Identity proxy used for deduplication: `(name, size)`.
    pub fn same_file(&self, other: &FileDescriptor) -> bool {
        self.name == other.name && self.size() == other.size()
    }
}

fn guess_mime_type(name: &str) -> String {
    mime_guess::from_path(name)
        .first_raw()
        .unwrap_or(FALLBACK_MIME_TYPE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_mime_prefix() {
        assert_eq!(MediaCategory::from_mime("image/png"), MediaCategory::Image);
        assert_eq!(MediaCategory::from_mime("video/mp4"), MediaCategory::Video);
        assert_eq!(MediaCategory::from_mime("audio/mpeg"), MediaCategory::Audio);
        assert_eq!(
            MediaCategory::from_mime("application/pdf"),
            MediaCategory::Document
        );
        assert_eq!(MediaCategory::from_mime(""), MediaCategory::Document);
        // Prefix match only, not substring
        assert_eq!(
            MediaCategory::from_mime("application/image/x"),
            MediaCategory::Document
        );
    }

    #[test]
    fn descriptor_guesses_mime_type() {
        let photo = FileDescriptor::from_bytes("photo.jpg", vec![0u8; 10]);
        assert_eq!(photo.mime_type(), "image/jpeg");
        assert_eq!(photo.category(), MediaCategory::Image);
        assert_eq!(photo.size(), 10);

        let unknown = FileDescriptor::from_bytes("blob.unknownext", Bytes::new());
        assert_eq!(unknown.mime_type(), "application/octet-stream");
        assert_eq!(unknown.category(), MediaCategory::Document);
    }

    #[test]
    fn descriptor_keeps_explicit_mime_type() {
        let file = FileDescriptor::new("clip.bin", "video/webm", Bytes::from_static(b"abc"));
        assert_eq!(file.mime_type(), "video/webm");
        assert_eq!(file.category(), MediaCategory::Video);

        let empty_type = FileDescriptor::new("song.mp3", "", Bytes::from_static(b"abc"));
        assert_eq!(empty_type.category(), MediaCategory::Audio);
    }

    #[test]
    fn same_file_compares_name_and_size() {
        let a = FileDescriptor::from_bytes("a.txt", b"hello".to_vec());
        let same = FileDescriptor::from_bytes("a.txt", b"world".to_vec());
        let other_size = FileDescriptor::from_bytes("a.txt", b"hi".to_vec());
        let other_name = FileDescriptor::from_bytes("b.txt", b"hello".to_vec());

        assert!(a.same_file(&same));
        assert!(!a.same_file(&other_size));
        assert!(!a.same_file(&other_name));
    }
}
