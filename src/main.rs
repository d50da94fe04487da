//! # WWIV Menus
//!
//! Runs a menu set from the local console.
//!

mod term;

fn main() {
    term::main();
}
