//! Window shell port interface
//!
//! Outbound collaborator port for the embedding application's window
//! manager. All calls are fire-and-forget: the dispatcher never waits
//! for the shell to act.

use crate::domain::notification::SoundName;

/// Message sent to the embedding shell's event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Play a named notification sound in the renderer
    PlaySound(SoundName),
    /// Flash or stop flashing the main window's frame
    FlashFrame(bool),
    /// Restore and focus the main window
    RestoreMain,
}

/// Port for window-shell side effects
pub trait WindowShell: Send + Sync {
    /// Forward a message to the shell's renderer/event loop
    fn send_to_renderer(&self, command: ShellCommand);

    /// Flash the main window's frame to draw attention
    fn flash_frame(&self, flash: bool) {
        self.send_to_renderer(ShellCommand::FlashFrame(flash));
    }

    /// Restore and focus the main window
    fn restore_main(&self) {
        self.send_to_renderer(ShellCommand::RestoreMain);
    }
}

/// Blanket implementation for boxed shell types
impl WindowShell for Box<dyn WindowShell> {
    fn send_to_renderer(&self, command: ShellCommand) {
        self.as_ref().send_to_renderer(command)
    }
}
