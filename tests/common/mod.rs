#![allow(dead_code)]

use menus::mach::{ExternalOutcome, Host, MenuConfig, Principal, TerminalCaps};
use menus::rec::{write_menu, MenuHeader, MenuItem};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A host that replays queued input and records everything the engine
/// does. It hangs up once the input runs out.
#[derive(Default)]
pub struct ScriptedHost {
    pub principal: Principal,
    pub inputs: VecDeque<String>,
    pub passwords: VecDeque<String>,
    pub expert: bool,
    pub hotkeys: bool,
    pub caps: TerminalCaps,
    pub menu_sets: VecDeque<String>,
    /// External commands that answer with `Reload`.
    pub reload_on: Vec<String>,
    pub hangup: bool,
    /// Drops the line when a password is asked for, like Ctrl-C at the prompt.
    pub hang_up_at_password: bool,
    pub displayed: Vec<String>,
    pub logged: Vec<String>,
    pub externals: Vec<(String, String, String)>,
    pub printed: Vec<PathBuf>,
    pub password_prompts: usize,
    pub reads: usize,
}

impl ScriptedHost {
    pub fn new(inputs: &[&str]) -> ScriptedHost {
        ScriptedHost {
            principal: Principal {
                effective_sl: 10,
                dsl: 10,
                ..Principal::default()
            },
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..ScriptedHost::default()
        }
    }

    pub fn external_names(&self) -> Vec<&str> {
        self.externals.iter().map(|(c, _, _)| c.as_str()).collect()
    }

    pub fn prompts_shown(&self, prompt: &str) -> usize {
        self.displayed.iter().filter(|s| s.as_str() == prompt).count()
    }

    pub fn logged_containing(&self, text: &str) -> bool {
        self.logged.iter().any(|line| line.contains(text))
    }
}

impl Host for ScriptedHost {
    fn principal(&self) -> Principal {
        self.principal.clone()
    }

    fn read_command_line(&mut self) -> String {
        self.reads += 1;
        match self.inputs.pop_front() {
            Some(line) => line,
            None => {
                self.hangup = true;
                String::new()
            }
        }
    }

    fn display_text(&mut self, text: &str) {
        self.displayed.push(text.to_string());
    }

    fn prompt_password(&mut self, _label: &str) -> String {
        self.password_prompts += 1;
        if self.hang_up_at_password {
            self.hangup = true;
            return String::new();
        }
        self.passwords.pop_front().unwrap_or_default()
    }

    fn log(&mut self, line: &str) {
        self.logged.push(line.to_string());
    }

    fn run_external(&mut self, command: &str, param1: &str, param2: &str) -> ExternalOutcome {
        self.externals
            .push((command.to_string(), param1.to_string(), param2.to_string()));
        if command.eq_ignore_ascii_case("Logoff") {
            self.hangup = true;
        }
        if self.reload_on.iter().any(|c| c.eq_ignore_ascii_case(command)) {
            ExternalOutcome::Reload
        } else {
            ExternalOutcome::Continue
        }
    }

    fn is_hangup(&self) -> bool {
        self.hangup
    }

    fn hang_up(&mut self) {
        self.hangup = true;
    }

    fn is_expert_mode(&self) -> bool {
        self.expert
    }

    fn uses_hotkeys(&self) -> bool {
        self.hotkeys
    }

    fn terminal_caps(&self) -> TerminalCaps {
        self.caps
    }

    fn print_file(&mut self, path: &Path) -> bool {
        self.printed.push(path.to_path_buf());
        true
    }

    fn menu_set(&mut self) -> Option<String> {
        self.menu_sets.pop_front()
    }
}

/// A temporary menu root holding menu sets.
pub struct MenuRoot {
    pub dir: TempDir,
}

impl MenuRoot {
    pub fn new() -> MenuRoot {
        MenuRoot {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn set_dir(&self, set: &str) -> PathBuf {
        self.dir.path().join(set)
    }

    pub fn config(&self) -> MenuConfig {
        MenuConfig::new(self.path())
    }

    pub fn menu(&self, set: &str, name: &str, header: &MenuHeader, items: &[MenuItem]) {
        let dir = self.set_dir(set);
        fs::create_dir_all(&dir).unwrap();
        write_menu(dir.join(format!("{}.mnu", name)), header, items).unwrap();
    }

    pub fn file(&self, set: &str, name: &str, contents: &str) {
        let dir = self.set_dir(set);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }
}

pub fn item(key: &str, script: &str) -> MenuItem {
    MenuItem::new(key, script)
}
