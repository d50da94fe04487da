use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Every menu set starts here.
pub const ENTRY_MENU: &str = "main";
pub const DESCRIPTIONS_FILE: &str = "descript.ion";

pub fn is_valid_menu_set(menu_root: &Path, set: &str) -> bool {
    !set.is_empty()
        && menu_root
            .join(set)
            .join(format!("{}.mnu", ENTRY_MENU))
            .is_file()
}

/// Names of the usable menu sets under `menu_root`, sorted.
pub fn list_menu_sets(menu_root: &Path) -> io::Result<Vec<String>> {
    let mut sets = vec![];
    for entry in fs::read_dir(menu_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if is_valid_menu_set(menu_root, name) {
                sets.push(name.to_string());
            }
        }
    }
    sets.sort();
    Ok(sets)
}

/// One line descriptions of the menu sets, kept in `descript.ion`.
#[derive(Debug, Clone)]
pub struct MenuDescriptions {
    path: PathBuf,
    descriptions: BTreeMap<String, String>,
}

impl MenuDescriptions {
    pub fn load(menu_root: &Path) -> io::Result<MenuDescriptions> {
        let path = menu_root.join(DESCRIPTIONS_FILE);
        let mut descriptions = BTreeMap::new();
        match fs::read_to_string(&path) {
            Ok(text) => {
                for line in text.lines() {
                    let line = line.trim();
                    if let Some((name, description)) = line.split_once(' ') {
                        descriptions.insert(name.to_lowercase(), description.to_lowercase());
                    }
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        Ok(MenuDescriptions { path, descriptions })
    }

    pub fn description(&self, name: &str) -> &str {
        self.descriptions
            .get(&name.to_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_description(&mut self, name: &str, description: &str) -> io::Result<()> {
        self.descriptions
            .insert(name.to_lowercase(), description.to_string());
        let mut file = fs::File::create(&self.path)?;
        for (name, description) in &self.descriptions {
            writeln!(file, "{} {}", name, description)?;
        }
        Ok(())
    }
}
