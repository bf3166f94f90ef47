//! Terminal status indicator
//!
//! A spinner drawn on stderr while the crawl runs. It lives in its own task,
//! knows nothing about crawl state, and stops on a single signal.

use std::io::Write;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const FRAMES: &[char] = &['|', '/', '-', '\\'];
const FRAME_INTERVAL: Duration = Duration::from_millis(120);

/// Handle to a running spinner task
#[derive(Debug)]
pub struct StatusIndicator {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl StatusIndicator {
    /// Starts the spinner with a fixed label
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(label: impl Into<String>) -> Self {
        let (stop, stopped) = oneshot::channel();
        let handle = tokio::spawn(spin(label.into(), stopped));
        Self { stop, handle }
    }

    /// Signals the spinner to stop and waits until it has cleared its line
    pub async fn stop(self) {
        // The task may already be gone if stderr was closed under it
        let _ = self.stop.send(());

        if let Err(e) = self.handle.await {
            tracing::debug!("Status indicator task ended abnormally: {}", e);
        }
    }
}

async fn spin(label: String, mut stopped: oneshot::Receiver<()>) {
    let mut ticker = tokio::time::interval(FRAME_INTERVAL);
    let mut frame = 0usize;

    loop {
        tokio::select! {
            _ = &mut stopped => break,
            _ = ticker.tick() => {
                let mut stderr = std::io::stderr().lock();
                let _ = write!(stderr, "\r{} {}", FRAMES[frame % FRAMES.len()], label);
                let _ = stderr.flush();
                frame = frame.wrapping_add(1);
            }
        }
    }

    let mut stderr = std::io::stderr().lock();
    let _ = write!(stderr, "\r{}\r", " ".repeat(label.chars().count() + 2));
    let _ = stderr.flush();
}
