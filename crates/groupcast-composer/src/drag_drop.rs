//! Drop target for dragged files.

use groupcast_core::FileDescriptor;

/// Drag events delivered to the drop surface.
#[derive(Debug, Clone)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
    Drop(Vec<FileDescriptor>),
}

/// What the host must do with a handled event.
#[derive(Debug, Default)]
pub struct DropDisposition {
    /// Suppress the host's default open/navigate behavior. Always set.
    pub prevent_default: bool,
    /// Files to stage; non-empty only for a drop.
    pub files: Vec<FileDescriptor>,
}

/// Drop surface state. `highlighted` is presentation only.
#[derive(Debug, Default)]
pub struct DragDropZone {
    highlighted: bool,
}

impl DragDropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn handle(&mut self, event: DragEvent) -> DropDisposition {
        let files = match event {
            DragEvent::Enter | DragEvent::Over => {
                self.highlighted = true;
                Vec::new()
            }
            DragEvent::Leave => {
                self.highlighted = false;
                Vec::new()
            }
            DragEvent::Drop(files) => {
                self.highlighted = false;
                files
            }
        };

        DropDisposition {
            prevent_default: true,
            files,
        }
    }
}
