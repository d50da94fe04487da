use super::Principal;
use std::path::Path;

pub const MENU_LOG_PREFIX: &str = "*MENU* : ";
const MENU_LOG_MAX: usize = 180;

/// What the surrounding system wants after running an external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalOutcome {
    Continue,
    /// Leave every open menu and start over with a freshly selected menu set.
    Reload,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalCaps {
    pub ansi: bool,
    pub color: bool,
}

/// Everything the menu engine needs from the connection it is serving.
pub trait Host {
    fn principal(&self) -> Principal;

    /// Blocks until the caller enters a command. Check `is_hangup` after.
    fn read_command_line(&mut self) -> String;

    fn display_text(&mut self, text: &str);

    fn prompt_password(&mut self, label: &str) -> String;

    /// Sysop log.
    fn log(&mut self, line: &str);

    fn run_external(&mut self, command: &str, param1: &str, param2: &str) -> ExternalOutcome;

    fn is_hangup(&self) -> bool;

    /// Drops the connection. `is_hangup` reports true afterwards.
    fn hang_up(&mut self);

    fn is_expert_mode(&self) -> bool;

    fn uses_hotkeys(&self) -> bool {
        false
    }

    fn terminal_caps(&self) -> TerminalCaps {
        TerminalCaps::default()
    }

    /// Shows a help file. Returning false makes the engine generate a menu.
    fn print_file(&mut self, _path: &Path) -> bool {
        false
    }

    /// The menu set the caller has chosen, if any.
    fn menu_set(&mut self) -> Option<String> {
        None
    }
}

pub fn menu_log(host: &mut dyn Host, msg: &str) {
    let msg: String = msg.chars().take(MENU_LOG_MAX).collect();
    host.log(&format!("{}{}", MENU_LOG_PREFIX, msg));
}
