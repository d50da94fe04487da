use super::field::{FieldReader, FieldWriter};
use super::header::byte_enum;
use super::{DecodeError, MAX_KEY_LEN, MAX_PASSWORD_LEN, MAX_SCRIPT_LEN};
use bitflags::bitflags;

byte_enum!(
    /// Which menu styles leave the item out of their listing.
    HideFrom, "hide_from", {
        None = 0,
        Pulldown = 1,
        Regular = 2,
        Both = 3,
    }
);

impl HideFrom {
    pub fn hides_regular(self) -> bool {
        matches!(self, HideFrom::Regular | HideFrom::Both)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ItemFlags: u8 {
        const DELETED = 0x01;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PulldownFlags: u8 {
        const NO_CLEAR = 0x01;
        const NO_PAUSE_AFTER = 0x02;
        const NO_RESTORE = 0x04;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub flags: ItemFlags,
    pub key: String,
    pub execute_script: String,
    pub menu_text: String,
    pub pulldown_text: String,
    pub help_text: String,
    pub sysoplog_text: String,
    pub instance_message: String,
    pub min_sl: u16,
    pub max_sl: u16,
    pub min_dsl: u16,
    pub max_dsl: u16,
    pub ar_mask: u16,
    pub dar_mask: u16,
    pub restrict_mask: u16,
    pub sysop_only: bool,
    pub cosysop_only: bool,
    pub password: String,
    pub hide_from: HideFrom,
    pub pulldown_flags: PulldownFlags,
    pub extended_help_file: String,
}

impl Default for MenuItem {
    fn default() -> MenuItem {
        MenuItem {
            flags: ItemFlags::empty(),
            key: String::new(),
            execute_script: String::new(),
            menu_text: String::new(),
            pulldown_text: String::new(),
            help_text: String::new(),
            sysoplog_text: String::new(),
            instance_message: String::new(),
            min_sl: 0,
            max_sl: 0,
            min_dsl: 0,
            max_dsl: 0,
            ar_mask: 0,
            dar_mask: 0,
            restrict_mask: 0,
            sysop_only: false,
            cosysop_only: false,
            password: String::new(),
            hide_from: HideFrom::None,
            pulldown_flags: PulldownFlags::empty(),
            extended_help_file: String::new(),
        }
    }
}

impl MenuItem {
    pub fn new(key: &str, execute_script: &str) -> MenuItem {
        MenuItem {
            key: key.to_string(),
            execute_script: execute_script.to_string(),
            ..MenuItem::default()
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.flags.contains(ItemFlags::DELETED)
    }

    /// Text shown in listings and description logging.
    pub fn description(&self) -> &str {
        if self.menu_text.is_empty() {
            &self.execute_script
        } else {
            &self.menu_text
        }
    }

    pub fn decode(record: usize, bytes: &[u8]) -> Result<MenuItem, DecodeError> {
        let mut r = FieldReader::new(record, bytes)?;
        Ok(MenuItem {
            flags: ItemFlags::from_bits_truncate(r.u8()?),
            key: r.string("key", MAX_KEY_LEN + 1)?,
            execute_script: r.string("execute_script", MAX_SCRIPT_LEN + 1)?,
            menu_text: r.string("menu_text", 41)?,
            pulldown_text: r.string("pulldown_text", 41)?,
            help_text: r.string("help_text", 81)?,
            sysoplog_text: r.string("sysoplog_text", 51)?,
            instance_message: r.string("instance_message", 81)?,
            min_sl: r.u16()?,
            max_sl: r.u16()?,
            min_dsl: r.u16()?,
            max_dsl: r.u16()?,
            ar_mask: r.u16()?,
            dar_mask: r.u16()?,
            restrict_mask: r.u16()?,
            sysop_only: r.flag()?,
            cosysop_only: r.flag()?,
            password: r.string("password", MAX_PASSWORD_LEN + 1)?,
            hide_from: HideFrom::from_byte(r.u8()?)?,
            pulldown_flags: PulldownFlags::from_bits_truncate(r.u8()?),
            extended_help_file: r.string("extended_help_file", 13)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut w = FieldWriter::new();
        w.u8(self.flags.bits());
        w.string(&self.key, MAX_KEY_LEN + 1);
        w.string(&self.execute_script, MAX_SCRIPT_LEN + 1);
        w.string(&self.menu_text, 41);
        w.string(&self.pulldown_text, 41);
        w.string(&self.help_text, 81);
        w.string(&self.sysoplog_text, 51);
        w.string(&self.instance_message, 81);
        w.u16(self.min_sl);
        w.u16(self.max_sl);
        w.u16(self.min_dsl);
        w.u16(self.max_dsl);
        w.u16(self.ar_mask);
        w.u16(self.dar_mask);
        w.u16(self.restrict_mask);
        w.flag(self.sysop_only);
        w.flag(self.cosysop_only);
        w.string(&self.password, MAX_PASSWORD_LEN + 1);
        w.u8(self.hide_from.to_byte());
        w.u8(self.pulldown_flags.bits());
        w.string(&self.extended_help_file, 13);
        w.finish()
    }
}
