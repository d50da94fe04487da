use super::{allowed, MenuIndex, Policy, Principal, TerminalCaps};
use crate::rec::{MenuHeader, NumbersMode};
use std::fs;
use std::path::{Path, PathBuf};

pub const PROMPT_END_MARKER: &str = ".end.";
pub const DEFAULT_PROMPT: &str = "Command: ";

/// Reads a `.pro` prompt file, keeping only the text before `.end.`.
pub fn load_prompt(path: &Path) -> Option<String> {
    let bytes = fs::read(path).ok()?;
    let text: String = bytes.iter().map(|&b| char::from(b)).collect();
    match text.find(PROMPT_END_MARKER) {
        Some(pos) => Some(text[..pos].to_string()),
        None => Some(text),
    }
}

/// Help files to try for a menu, best first.
pub fn help_file_candidates(dir: &Path, menu: &str, caps: TerminalCaps) -> Vec<PathBuf> {
    let mut extensions = vec![];
    if caps.ansi {
        if caps.color {
            extensions.push("ans");
        }
        extensions.push("b&w");
    }
    extensions.push("msg");
    extensions
        .iter()
        .map(|ext| dir.join(format!("{}.{}", menu, ext)))
        .collect()
}

fn display_key(key: &str, hotkeys: bool) -> String {
    if key.chars().count() > 1 && !key.starts_with('/') && hotkeys {
        format!("//{}", key)
    } else {
        format!("[{}]", key)
    }
}

/// Builds the two column listing shown when a menu has no help file.
pub fn generate_menu(header: &MenuHeader, index: &MenuIndex, who: &Principal, hotkeys: bool) -> String {
    let mut out = String::from("\n");
    let mut displayed = 0;
    let mut cell = |out: &mut String, key: &str, text: &str| {
        out.push_str(&format!("{:<8.8}  {:<25.25}  ", key, text));
        if displayed % 2 == 1 {
            out.push('\n');
        }
        displayed += 1;
    };
    if header.numbers_mode != NumbersMode::Nothing {
        cell(&mut out, "[#]", "Change Sub/Dir #");
    }
    for (_, item) in index.iter() {
        if item.hide_from.hides_regular() || !allowed(&Policy::from(item), who, None) {
            continue;
        }
        cell(&mut out, &display_key(&item.key, hotkeys), item.description());
    }
    out.push_str("\n\n");
    out
}
