//! Simulated upload progress.
//!
//! The value is synthetic: it climbs by a fixed step per tick while a request
//! is outstanding, is never shown above the configured ceiling until the
//! request settles, then jumps to 100% and hides after a delay. It knows
//! nothing about bytes actually transferred.

use std::sync::Arc;

use groupcast_core::ProgressConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant};
use tokio_util::sync::CancellationToken;

/// What the progress bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressState {
    pub visible: bool,
    /// Fill percentage, 0..=100
    pub percent: u8,
}

/// Drives the progress bar for one submission at a time.
///
/// Contract: [`start`](Self::start) when a request is dispatched,
/// [`complete`](Self::complete) when it settles. Must be used inside a tokio
/// runtime.
pub struct ProgressSimulator {
    config: ProgressConfig,
    state: Arc<watch::Sender<ProgressState>>,
    ticker: Option<JoinHandle<()>>,
    hide: Option<JoinHandle<()>>,
}

impl ProgressSimulator {
    pub fn new(config: ProgressConfig) -> Self {
        let (state, _) = watch::channel(ProgressState::default());
        Self {
            config,
            state: Arc::new(state),
            ticker: None,
            hide: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ProgressState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> ProgressState {
        *self.state.borrow()
    }

    /// Show the bar at 0% and start ticking until `token` is cancelled or
    /// the ceiling is passed.
    pub fn start(&mut self, token: CancellationToken) {
        self.abort_tasks();
        self.state.send_replace(ProgressState {
            visible: true,
            percent: 0,
        });

        let state = Arc::clone(&self.state);
        let tick = self.config.tick;
        let step = u32::from(self.config.step);
        let ceiling = u32::from(self.config.ceiling);

        self.ticker = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + tick, tick);
            let mut progress = 0u32;
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticks.tick() => {
                        progress += step;
                        if progress > ceiling {
                            // Nothing more to show until settlement.
                            break;
                        }
                        let percent = progress as u8;
                        state.send_if_modified(|s| {
                            if s.visible && s.percent < 100 {
                                s.percent = percent;
                                true
                            } else {
                                false
                            }
                        });
                    }
                }
            }
        }));
    }

    /// Force 100% now and hide the bar (resetting to 0) after the configured
    /// delay.
    pub fn complete(&mut self) {
        self.abort_tasks();
        self.state.send_replace(ProgressState {
            visible: true,
            percent: 100,
        });

        let state = Arc::clone(&self.state);
        let delay = self.config.hide_delay;
        self.hide = Some(tokio::spawn(async move {
            sleep(delay).await;
            state.send_if_modified(|s| {
                if s.percent == 100 {
                    *s = ProgressState::default();
                    true
                } else {
                    false
                }
            });
        }));
    }

    fn abort_tasks(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
        if let Some(hide) = self.hide.take() {
            hide.abort();
        }
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        self.abort_tasks();
    }
}
