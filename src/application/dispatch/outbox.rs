//! Reply outbox - queue between synchronous handlers and async adapters

use tokio::sync::mpsc;

/// Clonable handle that handlers queue reply lines through
///
/// Sending is synchronous so handlers never block or await; whoever owns
/// the receiving end drains the queue and delivers the lines.
#[derive(Clone)]
pub struct Outbox {
    tx: mpsc::UnboundedSender<String>,
}

impl Outbox {
    /// Create an outbox and the receiving end for whoever delivers replies
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue a reply line
    pub fn say(&self, line: impl Into<String>) {
        if let Err(e) = self.tx.send(line.into()) {
            tracing::warn!("Reply receiver closed, dropping line: {}", e.0);
        }
    }
}
