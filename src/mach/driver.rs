use super::{is_valid_menu_set, menu_log, Host, MenuConfig, OpenError, Outcome, Session, ENTRY_MENU};
use log::info;

#[derive(Debug)]
pub enum DriverExit {
    /// The entry menu returned without asking for a reload.
    Finished,
    Hangup,
    /// The entry menu of the selected set could not be opened. Callers
    /// conventionally drop the connection.
    MainMenuUnavailable(OpenError),
}

/// Runs the entry menu of the caller's menu set, starting over with a
/// freshly selected set whenever the session asks for a reload.
pub struct MenuDriver<'c> {
    config: &'c MenuConfig,
}

impl<'c> MenuDriver<'c> {
    pub fn new(config: &'c MenuConfig) -> MenuDriver<'c> {
        MenuDriver { config }
    }

    /// The caller's menu set when it is usable, otherwise the default.
    pub fn select_menu_set(&self, host: &mut dyn Host) -> String {
        match host.menu_set() {
            Some(set) if is_valid_menu_set(&self.config.menu_root, &set) => set,
            Some(set) => {
                menu_log(host, "Menuset not valid");
                menu_log(host, &set);
                self.config.default_set.clone()
            }
            None => self.config.default_set.clone(),
        }
    }

    pub fn run(&self, host: &mut dyn Host) -> DriverExit {
        while !host.is_hangup() {
            let set = self.select_menu_set(host);
            info!("menu set {}", set);
            let mut session = Session::new(self.config, self.config.menu_set_dir(&set), ENTRY_MENU);
            if let Err(e) = session.open(host) {
                if host.is_hangup() {
                    break;
                }
                return DriverExit::MainMenuUnavailable(e);
            }
            let outcome = session.run(host);
            session.close();
            match outcome {
                Outcome::Reload => continue,
                Outcome::Finished => return DriverExit::Finished,
                Outcome::Hangup => break,
            }
        }
        DriverExit::Hangup
    }
}
