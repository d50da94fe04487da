use super::{
    allowed, generate_menu, help_file_candidates, load_prompt, menu_log, resolve, Challenge,
    Command, ExternalOutcome, Host, MenuConfig, MenuIndex, Policy, ENTRY_MENU,
};
use crate::lang::{Script, Statement};
use crate::rec::{
    self, DecodeError, ForceHelp, LoggingMode, MenuFile, MenuHeader, MenuItem, NumbersMode,
};
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
    Running,
    Finished { reload: bool },
}

/// How a session's loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Finished,
    /// The menu set should be selected again from the top.
    Reload,
    Hangup,
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is damaged: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("access to menu {0} denied")]
    AccessDenied(String),
    #[error("menu {menu} would nest {depth} deep")]
    TooDeep { menu: String, depth: usize },
}

/// One open menu: its header, its index, and the read-execute loop.
/// Submenus are run as nested sessions on the call stack.
pub struct Session<'c> {
    config: &'c MenuConfig,
    set_dir: PathBuf,
    name: String,
    depth: usize,
    state: SessionState,
    header: MenuHeader,
    index: MenuIndex,
    prompt: String,
}

impl<'c> Session<'c> {
    pub fn new<P: AsRef<Path>>(config: &'c MenuConfig, set_dir: P, name: &str) -> Session<'c> {
        Session {
            config,
            set_dir: set_dir.as_ref().to_path_buf(),
            name: name.to_string(),
            depth: 0,
            state: SessionState::Closed,
            header: MenuHeader::default(),
            index: MenuIndex::default(),
            prompt: String::new(),
        }
    }

    fn submenu(&self, name: &str) -> Session<'c> {
        Session {
            depth: self.depth + 1,
            ..Session::new(self.config, &self.set_dir, name)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn header(&self) -> &MenuHeader {
        &self.header
    }

    pub fn index(&self) -> &MenuIndex {
        &self.index
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    fn menu_path(&self, ext: &str) -> PathBuf {
        self.set_dir.join(format!("{}.{}", self.name, ext))
    }

    pub fn open(&mut self, host: &mut dyn Host) -> Result<(), OpenError> {
        if self.depth > self.config.max_depth {
            menu_log(host, &format!("Menus nested too deep : {}", self.name));
            return Err(OpenError::TooDeep {
                menu: self.name.clone(),
                depth: self.depth,
            });
        }
        let path = self.menu_path("mnu");
        let (header, index) = match read_menu(&path) {
            Ok(menu) => menu,
            Err(e) => {
                menu_log(host, "Unable to open Menu");
                warn!("{}", e);
                return Err(e);
            }
        };

        let who = host.principal();
        let mut prompt_password = |label: &str| host.prompt_password(label);
        let challenge = Challenge {
            prompt: &mut prompt_password,
            system_password: &self.config.system_password,
        };
        if !allowed(&Policy::from(&header), &who, Some(challenge)) {
            menu_log(host, "< Menu Sec");
            return Err(OpenError::AccessDenied(self.name.clone()));
        }

        self.prompt = load_prompt(&self.menu_path("pro"))
            .unwrap_or_else(|| self.config.default_prompt.clone());
        self.header = header;
        self.index = index;
        self.state = SessionState::Open;
        debug!(
            "opened menu {} at depth {} with {} items",
            path.display(),
            self.depth,
            self.index.len()
        );

        let entry_script = self.header.entry_script.clone();
        self.interpret(host, &entry_script);
        Ok(())
    }

    /// Prompts and executes commands until the menu is finished or the
    /// caller hangs up.
    pub fn run(&mut self, host: &mut dyn Host) -> Outcome {
        if self.state == SessionState::Open {
            self.state = SessionState::Running;
            if host.is_expert_mode() && self.header.force_help == ForceHelp::OnEntrance {
                self.display_help(host);
            }
        }
        while self.state == SessionState::Running {
            if host.is_hangup() {
                return Outcome::Hangup;
            }
            self.print_prompt(host);
            let input = host.read_command_line();
            if host.is_hangup() {
                return Outcome::Hangup;
            }
            self.execute_command(host, input.trim());
        }
        if host.is_hangup() {
            return Outcome::Hangup;
        }
        match self.state {
            SessionState::Finished { reload: true } => Outcome::Reload,
            _ => Outcome::Finished,
        }
    }

    pub fn close(&mut self) {
        if self.state != SessionState::Closed {
            debug!("closed menu {}", self.name);
        }
        self.index = MenuIndex::default();
        self.prompt.clear();
        self.state = SessionState::Closed;
    }

    fn finish(&mut self, reload: bool) {
        let reload = reload || self.state == SessionState::Finished { reload: true };
        self.state = SessionState::Finished { reload };
    }

    fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished { .. })
    }

    fn print_prompt(&mut self, host: &mut dyn Host) {
        if !host.is_expert_mode() || self.header.force_help == ForceHelp::Force {
            self.display_help(host);
        }
        host.display_text(&self.prompt);
    }

    pub fn display_help(&mut self, host: &mut dyn Host) {
        let caps = host.terminal_caps();
        let shown = help_file_candidates(&self.set_dir, &self.name, caps)
            .into_iter()
            .find(|path| path.is_file())
            .map_or(false, |path| host.print_file(&path));
        if !shown {
            let who = host.principal();
            let text = generate_menu(&self.header, &self.index, &who, host.uses_hotkeys());
            host.display_text(&text);
        }
    }

    /// Runs every record selected by `input`.
    pub fn execute_command(&mut self, host: &mut dyn Host, input: &str) {
        let selected = self.select(host, input);
        if selected.is_empty() {
            if self.header.logging_mode != LoggingMode::None {
                host.log(input);
            }
            return;
        }
        for item in selected {
            if self.is_finished() || host.is_hangup() {
                break;
            }
            match self.header.logging_mode {
                LoggingMode::None => {}
                LoggingMode::Key => host.log(input),
                LoggingMode::Command => host.log(&item.execute_script),
                LoggingMode::Description => host.log(item.description()),
            }
            self.interpret(host, &item.execute_script);
        }
    }

    fn select(&self, host: &mut dyn Host, input: &str) -> Vec<MenuItem> {
        if let Some(item) = self.numeric_shortcut(input) {
            return vec![item];
        }
        let who = host.principal();
        let mut selected = vec![];
        for item in self.index.lookup(input) {
            let mut prompt_password = |label: &str| host.prompt_password(label);
            let challenge = Challenge {
                prompt: &mut prompt_password,
                system_password: &self.config.system_password,
            };
            if allowed(&Policy::from(item), &who, Some(challenge)) {
                selected.push(item.clone());
            } else {
                menu_log(host, &format!("< item security : {}", input));
            }
        }
        selected
    }

    fn numeric_shortcut(&self, input: &str) -> Option<MenuItem> {
        let command = match self.header.numbers_mode {
            NumbersMode::Nothing => return None,
            NumbersMode::SetSubNumber => "SetSubNumber",
            NumbersMode::SetDirNumber => "SetDirNumber",
        };
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number = input
            .parse::<u64>()
            .map_or_else(|_| input.to_string(), |n| n.to_string());
        Some(MenuItem::new(input, &format!("{} {}", command, number)))
    }

    /// Interprets a whole script, stopping early only on hangup.
    pub fn interpret(&mut self, host: &mut dyn Host, script: &str) {
        for parsed in Script::new(script) {
            if host.is_hangup() {
                break;
            }
            for diagnostic in &parsed.diagnostics {
                menu_log(host, &diagnostic.to_string());
                menu_log(host, script);
                warn!("{} in menu {}: {:?}", diagnostic, self.name, script);
            }
            trace!("{}: {}", self.name, parsed.statement);
            self.dispatch(host, &parsed.statement);
        }
    }

    fn dispatch(&mut self, host: &mut dyn Host, statement: &Statement) {
        match resolve(statement, self.config.commands.as_ref()) {
            Command::EnterSubmenu(target) => self.enter_submenu(host, target),
            Command::ReturnFromMenu => {
                if !self.is_finished() {
                    self.finish(false);
                    let exit_script = self.header.exit_script.clone();
                    self.interpret(host, &exit_script);
                }
            }
            Command::DisplayHelp => {
                if host.is_expert_mode() {
                    self.display_help(host);
                }
            }
            Command::RunExternal(statement) => {
                let outcome =
                    host.run_external(&statement.command, &statement.param1, &statement.param2);
                if outcome == ExternalOutcome::Reload {
                    self.finish(true);
                }
            }
            Command::Unrecognized(name) => {
                menu_log(host, "The following command was not recognized");
                menu_log(host, name);
            }
        }
    }

    fn enter_submenu(&mut self, host: &mut dyn Host, target: &str) {
        let mut sub = self.submenu(target);
        if let Err(e) = sub.open(host) {
            debug!("submenu {} not entered: {}", target, e);
            // Without a main menu there is nothing left to return to.
            if target.eq_ignore_ascii_case(ENTRY_MENU) {
                host.hang_up();
            }
            return;
        }
        let outcome = sub.run(host);
        sub.close();
        if outcome == Outcome::Reload {
            self.finish(true);
        }
    }
}

fn read_menu(path: &Path) -> Result<(MenuHeader, MenuIndex), OpenError> {
    let file = MenuFile::open(path).map_err(|e| open_error(path, e))?;
    let decode = |source: DecodeError| OpenError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let header = file.header().map_err(decode)?;
    let index = MenuIndex::build(&file).map_err(decode)?;
    Ok((header, index))
}

fn open_error(path: &Path, e: rec::Error) -> OpenError {
    let path = path.to_path_buf();
    match e {
        rec::Error::Io(source) => OpenError::Io { path, source },
        rec::Error::Decode(source) => OpenError::Decode { path, source },
    }
}
