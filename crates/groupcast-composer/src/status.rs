//! Dismissible status banner.

use std::sync::Arc;
use std::time::Duration;

use groupcast_core::StatusTimings;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBanner {
    pub kind: StatusKind,
    pub message: String,
    /// Increases with every banner shown; a hide timer only clears the
    /// banner it was started for.
    pub serial: u64,
}

/// Shows one banner at a time. A new banner replaces the current one and
/// its auto-hide timer.
pub struct StatusReporter {
    timings: StatusTimings,
    banner: Arc<watch::Sender<Option<StatusBanner>>>,
    next_serial: u64,
    hide: Option<JoinHandle<()>>,
}

impl StatusReporter {
    pub fn new(timings: StatusTimings) -> Self {
        let (banner, _) = watch::channel(None);
        Self {
            timings,
            banner: Arc::new(banner),
            next_serial: 0,
            hide: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<StatusBanner>> {
        self.banner.subscribe()
    }

    pub fn current(&self) -> Option<StatusBanner> {
        self.banner.borrow().clone()
    }

    pub fn hide_delay(&self, kind: StatusKind) -> Duration {
        match kind {
            StatusKind::Success => self.timings.success_hide,
            StatusKind::Error => self.timings.error_hide,
        }
    }

    /// Display a banner and schedule its removal. Requires a tokio runtime.
    pub fn show(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.cancel_hide();
        self.next_serial += 1;
        let serial = self.next_serial;
        self.banner.send_replace(Some(StatusBanner {
            kind,
            message: message.into(),
            serial,
        }));

        let banner = Arc::clone(&self.banner);
        let delay = self.hide_delay(kind);
        self.hide = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            banner.send_if_modified(|current| match current {
                Some(shown) if shown.serial == serial => {
                    *current = None;
                    true
                }
                _ => false,
            });
        }));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(StatusKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(StatusKind::Error, message);
    }

    /// Remove the banner immediately.
    pub fn hide(&mut self) {
        self.cancel_hide();
        self.banner.send_if_modified(|current| current.take().is_some());
    }

    fn cancel_hide(&mut self) {
        if let Some(hide) = self.hide.take() {
            hide.abort();
        }
    }
}

impl Drop for StatusReporter {
    fn drop(&mut self) {
        self.cancel_hide();
    }
}
