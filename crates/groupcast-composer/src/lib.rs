//! Mass-message composer.
//!
//! Headless model of the composer page: the staged file list and its
//! rendering, the drop zone, the group checkboxes, the simulated progress bar,
//! the status banner and the submission lifecycle that ties them together.
//! UI events enter through [`Composer::handle`].

pub mod composer;
pub mod controller;
pub mod drag_drop;
pub mod file_collection;
pub mod file_list;
pub mod progress;
pub mod selection;
pub mod status;

pub use composer::{Composer, ComposerView, Handled, UiEvent};
pub use controller::{ControlState, FormState, SubmissionController, SubmissionOutcome};
pub use drag_drop::{DragDropZone, DragEvent, DropDisposition};
pub use file_collection::FileCollection;
pub use file_list::{render_file_list, FileListItem};
pub use progress::{ProgressSimulator, ProgressState};
pub use selection::GroupSelection;
pub use status::{StatusBanner, StatusKind, StatusReporter};
