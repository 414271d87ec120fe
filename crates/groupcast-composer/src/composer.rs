//! Composer page: UI events in, view state out.
//!
//! Handlers only forward to the components; the rendered file list is rebuilt
//! after every change to the staged files.

use groupcast_core::{
    ComposerConfig, FileDescriptor, GroupId, GroupOption, MessageTransport, ValidationError,
};
use tokio::sync::watch;

use crate::controller::{FormState, SubmissionController, SubmissionOutcome};
use crate::drag_drop::{DragDropZone, DragEvent};
use crate::file_list::{render_file_list, FileListItem};
use crate::progress::ProgressState;
use crate::selection::GroupSelection;
use crate::status::StatusBanner;

/// Named UI events the composer reacts to.
#[derive(Debug, Clone)]
pub enum UiEvent {
    SelectAllToggled(bool),
    GroupToggled { group_id: GroupId, checked: bool },
    MessageEdited(String),
    /// Files chosen through the file picker. The picker is reset afterwards.
    FilesPicked(Vec<FileDescriptor>),
    Drag(DragEvent),
    /// Remove control of the rendered row with this index.
    RemoveFile(usize),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    Updated,
    /// Drag event handled; the host must suppress its default behavior.
    DefaultPrevented { files_added: usize },
    /// Event had no effect (e.g. submit while the control is disabled).
    Ignored,
    Submitted(Result<SubmissionOutcome, ValidationError>),
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerView {
    pub message: String,
    pub files: Vec<FileListItem>,
    pub checked_groups: Vec<GroupId>,
    pub select_all: bool,
    pub drop_highlighted: bool,
    pub submit_enabled: bool,
    pub busy: bool,
    pub progress: ProgressState,
    pub status: Option<StatusBanner>,
}

pub struct Composer<T> {
    form: FormState,
    drop_zone: DragDropZone,
    file_list: Vec<FileListItem>,
    controller: SubmissionController<T>,
}

impl<T: MessageTransport> Composer<T> {
    pub fn new(
        groups: impl IntoIterator<Item = GroupOption>,
        transport: T,
        csrf_token: impl Into<String>,
        config: &ComposerConfig,
    ) -> Self {
        Self {
            form: FormState::new(GroupSelection::new(groups)),
            drop_zone: DragDropZone::new(),
            file_list: Vec::new(),
            controller: SubmissionController::new(transport, csrf_token, config),
        }
    }

    pub async fn handle(&mut self, event: UiEvent) -> Handled {
        match event {
            UiEvent::SelectAllToggled(checked) => {
                self.form.selection.set_all(checked);
                Handled::Updated
            }
            UiEvent::GroupToggled { group_id, checked } => {
                if self.form.selection.toggle(group_id, checked) {
                    Handled::Updated
                } else {
                    Handled::Ignored
                }
            }
            UiEvent::MessageEdited(text) => {
                self.form.message = text;
                Handled::Updated
            }
            UiEvent::FilesPicked(files) => {
                self.stage(files);
                Handled::Updated
            }
            UiEvent::Drag(event) => {
                let disposition = self.drop_zone.handle(event);
                let files_added = self.stage(disposition.files);
                Handled::DefaultPrevented { files_added }
            }
            UiEvent::RemoveFile(index) => {
                if self.form.files.remove(index).is_some() {
                    self.render_files();
                    Handled::Updated
                } else {
                    Handled::Ignored
                }
            }
            UiEvent::Submit => {
                if !self.controller.controls().submit_enabled {
                    tracing::debug!("Submit ignored while the submit control is disabled");
                    return Handled::Ignored;
                }
                let result = self.controller.submit(&mut self.form).await;
                self.render_files();
                Handled::Submitted(result)
            }
        }
    }

    pub fn view(&self) -> ComposerView {
        let controls = self.controller.controls();
        ComposerView {
            message: self.form.message.clone(),
            files: self.file_list.clone(),
            checked_groups: self.form.selection.checked_ids(),
            select_all: self.form.selection.select_all_checked(),
            drop_highlighted: self.drop_zone.is_highlighted(),
            submit_enabled: controls.submit_enabled,
            busy: controls.busy,
            progress: self.controller.progress().current(),
            status: self.controller.status().current(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn controller(&self) -> &SubmissionController<T> {
        &self.controller
    }

    pub fn subscribe_progress(&self) -> watch::Receiver<ProgressState> {
        self.controller.progress().subscribe()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<Option<StatusBanner>> {
        self.controller.status().subscribe()
    }

    fn stage(&mut self, files: Vec<FileDescriptor>) -> usize {
        if files.is_empty() {
            return 0;
        }
        let added = self.form.files.add(files);
        self.render_files();
        added
    }

    fn render_files(&mut self) {
        self.file_list = render_file_list(self.form.files.list());
    }
}
