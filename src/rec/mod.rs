/*!
# Rust Record Module

This Rust module decodes and encodes the fixed-size binary records of a
`.mnu` menu file. Record 0 is the menu header; records 1..N are menu items.
Every record occupies [`RECORD_SIZE`] bytes so any record can be located at
`index * RECORD_SIZE`.

*/

mod error;
mod field;
mod file;
mod header;
mod item;

pub use error::DecodeError;
pub use error::Error;
pub use file::write_menu;
pub use file::MenuFile;
pub use header::AllowedMenuType;
pub use header::ForceHelp;
pub use header::HeaderFlags;
pub use header::LoggingMode;
pub use header::MenuHeader;
pub use header::NumbersMode;
pub use header::PulldownColors;
pub use item::HideFrom;
pub use item::ItemFlags;
pub use item::MenuItem;
pub use item::PulldownFlags;

/// On-disk size of every record, header included.
pub const RECORD_SIZE: usize = 552;

pub const MENU_SIGNATURE: &str = "WWIV430";
pub const MENU_VERSION: u16 = 0x0500;

pub const MAX_KEY_LEN: usize = 10;
pub const MAX_SCRIPT_LEN: usize = 100;
pub const MAX_PASSWORD_LEN: usize = 20;

#[cfg(test)]
mod tests;
