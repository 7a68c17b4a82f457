//! Advice runtime integration.
//!
//! Bridges the sync game loop with async advisors. Requests run on a runtime
//! owned by the service; results come back over a channel that the game loop
//! polls once per frame.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::advice::{Advice, AdviceError, Advisor};
use crate::core::Grid;

/// Result delivered to the game loop.
///
/// `token` is whatever the caller passed to [`AdviceService::request`]; the
/// loop uses it to discard advice computed for a grid it has since left.
#[derive(Debug)]
pub struct AdviceResult {
    pub token: u64,
    pub result: Result<Advice, AdviceError>,
}

/// Running advice service.
pub struct AdviceService<A> {
    rt: Runtime,
    advisor: Arc<A>,
    timeout: Duration,
    tx: mpsc::UnboundedSender<AdviceResult>,
    rx: mpsc::UnboundedReceiver<AdviceResult>,
}

impl<A: Advisor + 'static> AdviceService<A> {
    pub fn new(advisor: A, timeout: Duration) -> std::io::Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("advice")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            rt,
            advisor: Arc::new(advisor),
            timeout,
            tx,
            rx,
        })
    }

    pub fn advisor(&self) -> &A {
        &self.advisor
    }

    /// Start computing advice for `grid`. Never blocks.
    pub fn request(&self, token: u64, grid: Grid) {
        let advisor = Arc::clone(&self.advisor);
        let tx = self.tx.clone();
        let timeout = self.timeout;
        debug!("advice: request {token} via {}", advisor.name());

        self.rt.spawn(async move {
            let result = match tokio::time::timeout(timeout, advisor.advise(grid)).await {
                Ok(result) => result,
                Err(_) => Err(AdviceError::Timeout(timeout.as_millis() as u64)),
            };
            if let Err(e) = &result {
                warn!("advice: request {token} failed: {e}");
            }
            let _ = tx.send(AdviceResult { token, result });
        });
    }

    pub fn try_recv(&mut self) -> Option<AdviceResult> {
        self.rx.try_recv().ok()
    }
}
