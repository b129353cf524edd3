// ABOUTME: Cancellable completion timer for the Processing step's auto-advance
// ABOUTME: Tokio task with abort-on-drop so a discarded flow never commits late
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 WellnessGenie

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::debug;

/// Scheduled auto-advance out of the Processing step.
///
/// The simulated processing delay is a fire-and-forget timer with one safety
/// requirement: it must not fire after the flow it belongs to is gone.
/// Dropping the guard aborts the task, so a stale callback can never commit a
/// profile after the user has navigated away.
#[derive(Debug)]
pub struct CompletionTimer {
    handle: JoinHandle<()>,
}

impl CompletionTimer {
    /// Schedule `on_fire` to run after `delay`. Must be called on a tokio
    /// runtime.
    pub fn schedule<F>(delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            debug!("processing delay elapsed");
            on_fire();
        });
        Self { handle }
    }

    /// Cancel the timer explicitly
    pub fn cancel(self) {
        self.handle.abort();
    }

    /// Whether the timer has already fired (or been aborted)
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CompletionTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
