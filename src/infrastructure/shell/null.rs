//! Null window shell adapter
//!
//! Used for headless operation where no window exists.

use crate::application::ports::{ShellCommand, WindowShell};

/// Window shell that discards every command
pub struct NullWindowShell;

impl NullWindowShell {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullWindowShell {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowShell for NullWindowShell {
    fn send_to_renderer(&self, _command: ShellCommand) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discards_commands() {
        let shell = NullWindowShell::new();
        shell.flash_frame(true);
        shell.restore_main();
    }
}
