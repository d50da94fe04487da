/*!
## Rust Machine Module

This Rust module runs menus. It decides who may open a menu or select an
item, resolves script statements to built-in menu control or to commands
the host implements, and drives the prompt, read, match and execute loop
across nested menus.

The engine performs no terminal I/O of its own. Everything it needs from
the connection goes through the [`Host`] trait.

*/

mod access;
mod command;
mod config;
mod driver;
mod host;
mod index;
mod menu_set;
mod prompt;
mod session;

pub use access::allowed;
pub use access::Challenge;
pub use access::Policy;
pub use access::PolicyScope;
pub use access::Principal;
pub use access::PASSWORD_PROMPT;
pub use access::SYSTEM_PASSWORD_SENTINEL;
pub use command::resolve;
pub use command::Command;
pub use command::CommandTable;
pub use config::MenuConfig;
pub use config::DEFAULT_MAX_DEPTH;
pub use config::DEFAULT_MENU_SET;
pub use driver::DriverExit;
pub use driver::MenuDriver;
pub use host::menu_log;
pub use host::ExternalOutcome;
pub use host::Host;
pub use host::TerminalCaps;
pub use host::MENU_LOG_PREFIX;
pub use index::IndexEntry;
pub use index::MenuIndex;
pub use menu_set::is_valid_menu_set;
pub use menu_set::list_menu_sets;
pub use menu_set::MenuDescriptions;
pub use menu_set::DESCRIPTIONS_FILE;
pub use menu_set::ENTRY_MENU;
pub use prompt::generate_menu;
pub use prompt::help_file_candidates;
pub use prompt::load_prompt;
pub use prompt::DEFAULT_PROMPT;
pub use prompt::PROMPT_END_MARKER;
pub use session::OpenError;
pub use session::Outcome;
pub use session::Session;
pub use session::SessionState;

#[cfg(test)]
mod tests;
