/*!
# Rust Language Module

This Rust module parses the menu script language. A script is a sequence of
statements separated by `~`. Each statement is a command name followed by up
to two parameters, written either `cmd param1 param2` or `cmd(param1, param2)`.

*/

mod diagnostic;
mod parse;
mod script;

pub use diagnostic::Diagnostic;
pub use parse::parse_statement;
pub use parse::Parsed;
pub use parse::Statement;
pub use script::Script;

/// Longest command name kept; extra characters are discarded.
pub const MAX_COMMAND_LEN: usize = 30;
/// Longest parameter kept; extra characters are discarded.
pub const MAX_PARAM_LEN: usize = 50;
/// Scripts are cut to this many characters before parsing.
pub const MAX_SCRIPT_TEXT: usize = 250;

#[cfg(test)]
mod tests;
