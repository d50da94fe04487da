extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use chrono::Local;
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use log::debug;
use menus::mach::{
    list_menu_sets, CommandTable, DriverExit, ExternalOutcome, Host, MenuConfig,
    MenuDescriptions, MenuDriver, OpenError, Principal, TerminalCaps,
};
use menus::rec;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

const LOGOFF: &str = "Logoff";
const CHANGE_MENU_SET: &str = "ConfigUserMenuSet";

/// Walk a WWIV menu set from the local console.
#[derive(Parser, Debug)]
#[command(name = "menus", version, about)]
struct Args {
    /// Directory holding the menu sets
    #[arg(long, default_value = "menus")]
    menus: PathBuf,
    /// Menu set to start in
    #[arg(long)]
    set: Option<String>,
    #[arg(long, default_value_t = 10)]
    sl: u16,
    #[arg(long, default_value_t = 10)]
    dsl: u16,
    /// AR bits held, as a number
    #[arg(long, default_value_t = 0)]
    ar: u16,
    /// DAR bits held, as a number
    #[arg(long, default_value_t = 0)]
    dar: u16,
    /// Restriction bits held, as a number
    #[arg(long, default_value_t = 0)]
    restrict: u16,
    #[arg(long)]
    sysop: bool,
    #[arg(long)]
    cosysop: bool,
    /// Only show menu help when a menu forces it
    #[arg(long)]
    expert: bool,
    #[arg(long)]
    hotkeys: bool,
    /// Stands in for menu passwords of *SYSTEM
    #[arg(long, default_value = "")]
    system_password: String,
    /// menucmds.dat listing the commands the board implements
    #[arg(long)]
    commands: Option<PathBuf>,
    /// List the menu sets and exit
    #[arg(long)]
    list: bool,
    /// Set the description of the menu set given with --set and exit
    #[arg(long, requires = "set")]
    describe: Option<String>,
}

#[derive(Debug, Error)]
enum ConsoleError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("menucmds.dat: {0}")]
    Commands(#[from] rec::Error),
    #[error("{0}")]
    MainMenu(#[from] OpenError),
}

pub fn main() {
    env_logger::init();
    let args = Args::parse();
    let hangup = Arc::new(AtomicBool::new(false));
    let hangup_moved = hangup.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        hangup_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    if let Err(error) = main_loop(args, hangup) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn main_loop(args: Args, hangup: Arc<AtomicBool>) -> Result<(), ConsoleError> {
    if args.list {
        return list(&args.menus);
    }
    if let (Some(set), Some(description)) = (&args.set, &args.describe) {
        let mut descriptions = MenuDescriptions::load(&args.menus)?;
        descriptions.set_description(set, description)?;
        return Ok(());
    }

    let mut config = MenuConfig::new(&args.menus);
    config.system_password = args.system_password.clone();
    if let Some(path) = &args.commands {
        let table = CommandTable::load(path)?;
        debug!("{} commands in {}", table.len(), path.display());
        config.commands = Some(table);
    }
    let mut host = ConsoleHost::new(&args, hangup)?;
    match MenuDriver::new(&config).run(&mut host) {
        DriverExit::Finished | DriverExit::Hangup => Ok(()),
        DriverExit::MainMenuUnavailable(error) => Err(error.into()),
    }
}

fn list(menu_root: &Path) -> Result<(), ConsoleError> {
    let descriptions = MenuDescriptions::load(menu_root)?;
    for set in list_menu_sets(menu_root)? {
        let name = Style::new().bold().paint(format!("{:<12}", set));
        println!("{} {}", name, descriptions.description(&set));
    }
    Ok(())
}

/// The local operator at the console.
struct ConsoleHost {
    interface: Interface<DefaultTerminal>,
    password: Interface<DefaultTerminal>,
    hangup: Arc<AtomicBool>,
    principal: Principal,
    expert: bool,
    hotkeys: bool,
    menu_set: Option<String>,
    pending: String,
}

impl ConsoleHost {
    fn new(args: &Args, hangup: Arc<AtomicBool>) -> io::Result<ConsoleHost> {
        let interface = Interface::new("Menus")?;
        interface.set_report_signal(Signal::Interrupt, true);
        let password = Interface::new("Password")?;
        password.set_report_signal(Signal::Interrupt, true);
        Ok(ConsoleHost {
            interface,
            password,
            hangup,
            principal: Principal {
                effective_sl: args.sl,
                dsl: args.dsl,
                ar_mask: args.ar,
                dar_mask: args.dar,
                restrict_mask: args.restrict,
                is_sysop: args.sysop,
                is_cosysop: args.cosysop || args.sysop,
                is_remote: false,
            },
            expert: args.expert,
            hotkeys: args.hotkeys,
            menu_set: args.set.clone(),
            pending: String::new(),
        })
    }

    fn write(&mut self, text: &str) {
        if self.interface.write_fmt(format_args!("{}", text)).is_err() {
            self.hangup.store(true, Ordering::SeqCst);
        }
    }

    // Text after the last newline becomes the prompt of the next read.
    fn take_prompt(&mut self) -> String {
        std::mem::take(&mut self.pending)
    }

    fn read(&mut self, password: bool, prompt: &str) -> String {
        let interface = if password {
            &self.password
        } else {
            &self.interface
        };
        if interface.set_prompt(prompt).is_err() {
            self.hangup.store(true, Ordering::SeqCst);
            return String::new();
        }
        match interface.read_line() {
            Ok(ReadResult::Input(line)) => {
                if !password {
                    interface.add_history_unique(line.clone());
                }
                line
            }
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) | Err(_) => {
                self.hangup.store(true, Ordering::SeqCst);
                String::new()
            }
        }
    }
}

impl Host for ConsoleHost {
    fn principal(&self) -> Principal {
        self.principal.clone()
    }

    fn read_command_line(&mut self) -> String {
        let prompt = self.take_prompt();
        self.read(false, &prompt)
    }

    fn display_text(&mut self, text: &str) {
        self.pending.push_str(text);
        if let Some(pos) = self.pending.rfind('\n') {
            let complete: String = self.pending.drain(..=pos).collect();
            self.write(&complete);
        }
    }

    fn prompt_password(&mut self, label: &str) -> String {
        let pending = self.take_prompt();
        self.write(&pending);
        self.read(true, label)
    }

    fn log(&mut self, line: &str) {
        let stamp = Local::now().format("%H:%M:%S");
        let text = format!("{} {}\n", stamp, line);
        let text = Style::new().dimmed().paint(text).to_string();
        self.write(&text);
    }

    fn run_external(&mut self, command: &str, param1: &str, param2: &str) -> ExternalOutcome {
        let echo = format!("{}({:?}, {:?})\n", command, param1, param2);
        let echo = Style::new().bold().paint(echo).to_string();
        self.write(&echo);
        if command.eq_ignore_ascii_case(LOGOFF) {
            self.hangup.store(true, Ordering::SeqCst);
        } else if command.eq_ignore_ascii_case(CHANGE_MENU_SET) && !param1.is_empty() {
            self.menu_set = Some(param1.to_string());
            return ExternalOutcome::Reload;
        }
        ExternalOutcome::Continue
    }

    fn is_hangup(&self) -> bool {
        self.hangup.load(Ordering::SeqCst)
    }

    fn hang_up(&mut self) {
        self.hangup.store(true, Ordering::SeqCst);
    }

    fn is_expert_mode(&self) -> bool {
        self.expert
    }

    fn uses_hotkeys(&self) -> bool {
        self.hotkeys
    }

    fn terminal_caps(&self) -> TerminalCaps {
        TerminalCaps {
            ansi: true,
            color: true,
        }
    }

    fn print_file(&mut self, path: &Path) -> bool {
        match fs::read(path) {
            Ok(bytes) => {
                let text: String = bytes.iter().map(|&b| char::from(b)).collect();
                self.write(&text);
                true
            }
            Err(error) => {
                debug!("{}: {}", path.display(), error);
                false
            }
        }
    }

    fn menu_set(&mut self) -> Option<String> {
        self.menu_set.clone()
    }
}
