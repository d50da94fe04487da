use super::{CommandTable, DEFAULT_PROMPT};
use std::path::{Path, PathBuf};

pub const DEFAULT_MENU_SET: &str = "wwiv";
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Engine settings shared by every session of a connection.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Directory holding one subdirectory per menu set.
    pub menu_root: PathBuf,
    pub default_set: String,
    /// Replaces a menu password of `*SYSTEM`.
    pub system_password: String,
    /// Deepest `MENU` nesting allowed; the entry menu is depth 0.
    pub max_depth: usize,
    /// Shown when a menu has no `.pro` file.
    pub default_prompt: String,
    /// External command names. `None` passes every name through.
    pub commands: Option<CommandTable>,
}

impl Default for MenuConfig {
    fn default() -> MenuConfig {
        MenuConfig {
            menu_root: PathBuf::from("menus"),
            default_set: DEFAULT_MENU_SET.to_string(),
            system_password: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            default_prompt: DEFAULT_PROMPT.to_string(),
            commands: None,
        }
    }
}

impl MenuConfig {
    pub fn new<P: AsRef<Path>>(menu_root: P) -> MenuConfig {
        MenuConfig {
            menu_root: menu_root.as_ref().to_path_buf(),
            ..MenuConfig::default()
        }
    }

    pub fn menu_set_dir(&self, set: &str) -> PathBuf {
        self.menu_root.join(set)
    }
}
