//! Channel-backed window shell adapter
//!
//! Forwards shell commands over an unbounded channel into the embedding
//! application's event loop. Sends never block; a closed receiver means
//! the shell is gone and the command is dropped.

use tokio::sync::mpsc;
use tracing::debug;

use crate::application::ports::{ShellCommand, WindowShell};

/// Window shell forwarding commands to an embedding event loop
pub struct ChannelWindowShell {
    tx: mpsc::UnboundedSender<ShellCommand>,
}

impl ChannelWindowShell {
    /// Create a shell and the receiving end for the embedding loop
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ShellCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl WindowShell for ChannelWindowShell {
    fn send_to_renderer(&self, command: ShellCommand) {
        if self.tx.send(command).is_err() {
            debug!("shell receiver dropped, command discarded");
        }
    }
}
