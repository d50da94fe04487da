use crate::lang::Statement;
use crate::rec::{DecodeError, Error};
use byteorder::{ByteOrder, LittleEndian};
use std::collections::BTreeSet;
use std::path::Path;

pub const ENTER_SUBMENU: &str = "MENU";
pub const RETURN_FROM_MENU: &str = "ReturnFromMenu";
pub const DISPLAY_HELP: &str = "DisplayHelp";

/// What a parsed statement asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    EnterSubmenu(&'a str),
    ReturnFromMenu,
    DisplayHelp,
    RunExternal(&'a Statement),
    Unrecognized(&'a str),
}

pub fn resolve<'a>(statement: &'a Statement, table: Option<&CommandTable>) -> Command<'a> {
    let name = statement.command.as_str();
    if name.eq_ignore_ascii_case(ENTER_SUBMENU) {
        Command::EnterSubmenu(&statement.param1)
    } else if name.eq_ignore_ascii_case(RETURN_FROM_MENU) {
        Command::ReturnFromMenu
    } else if name.eq_ignore_ascii_case(DISPLAY_HELP) {
        Command::DisplayHelp
    } else {
        match table {
            Some(table) if !table.contains(name) => Command::Unrecognized(name),
            _ => Command::RunExternal(statement),
        }
    }
}

/// Case-insensitive set of the command names the surrounding system
/// implements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    names: BTreeSet<String>,
}

impl CommandTable {
    pub fn from_names<I, S>(names: I) -> CommandTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CommandTable {
            names: names
                .into_iter()
                .map(|s| s.as_ref().to_ascii_uppercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<CommandTable, Error> {
        let data = std::fs::read(path)?;
        Ok(CommandTable::parse(&data)?)
    }

    /// Decodes `menucmds.dat`: a u16 count, `count` u16 offsets, then the
    /// NUL terminated names the offsets point into.
    pub fn parse(data: &[u8]) -> Result<CommandTable, DecodeError> {
        let truncated = |expected: usize| DecodeError::Truncated {
            record: 0,
            expected,
            actual: data.len(),
        };
        if data.len() < 2 {
            return Err(truncated(2));
        }
        let count = LittleEndian::read_u16(&data[0..2]) as usize;
        let blob_start = 2 + count * 2;
        if data.len() < blob_start {
            return Err(truncated(blob_start));
        }
        let blob = &data[blob_start..];
        let mut names = Vec::with_capacity(count);
        for n in 0..count {
            let offset = LittleEndian::read_u16(&data[2 + n * 2..4 + n * 2]) as usize;
            let tail = blob.get(offset..).ok_or_else(|| truncated(blob_start + offset))?;
            let len = tail
                .iter()
                .position(|&b| b == 0)
                .ok_or(DecodeError::Unterminated {
                    field: "command name",
                    size: tail.len(),
                })?;
            names.push(tail[..len].iter().map(|&b| char::from(b)).collect::<String>());
        }
        Ok(CommandTable::from_names(names))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
