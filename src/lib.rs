//! # WWIV Menus
//!
//! The menu engine of a WWIV bulletin board. It reads the binary `.mnu`
//! files authored with the menu editor, checks each caller's access to
//! menus and items, and interprets the small command scripts stored in
//! them.
//!
//! The engine does no terminal I/O. A board embeds it by implementing
//! [`mach::Host`] for a connection and handing it to a
//! [`mach::MenuDriver`].
//!
//! ```no_run
//! use menus::mach::{DriverExit, Host, MenuConfig, MenuDriver};
//!
//! fn serve(host: &mut dyn Host) {
//!     let config = MenuConfig::new("/bbs/menus");
//!     if let DriverExit::MainMenuUnavailable(error) = MenuDriver::new(&config).run(host) {
//!         eprintln!("{}", error);
//!     }
//! }
//! ```
//!
//! The `menus` executable runs a menu set from the local console, which
//! is handy for checking a menu set before callers see it.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod rec;
