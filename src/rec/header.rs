use super::field::{FieldReader, FieldWriter};
use super::{DecodeError, MAX_PASSWORD_LEN, MAX_SCRIPT_LEN, MENU_SIGNATURE, MENU_VERSION, RECORD_SIZE};
use bitflags::bitflags;

macro_rules! byte_enum {
    ($(#[$meta:meta])* $name:ident, $field:expr, { $($variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant = $value),+
        }

        impl $name {
            pub fn from_byte(value: u8) -> Result<$name, DecodeError> {
                match value {
                    $($value => Ok($name::$variant),)+
                    _ => Err(DecodeError::InvalidEnum { field: $field, value }),
                }
            }

            pub fn to_byte(self) -> u8 {
                self as u8
            }
        }
    };
}

pub(super) use byte_enum;

byte_enum!(
    /// What typing a bare number at the prompt does.
    NumbersMode, "numbers_mode", {
        Nothing = 0,
        SetSubNumber = 1,
        SetDirNumber = 2,
    }
);

byte_enum!(LoggingMode, "logging_mode", {
    None = 0,
    Key = 1,
    Command = 2,
    Description = 3,
});

byte_enum!(ForceHelp, "force_help", {
    DontForce = 0,
    Force = 1,
    OnEntrance = 2,
});

byte_enum!(AllowedMenuType, "allowed_menu_type", {
    Regular = 0,
    Pulldown = 1,
    Both = 2,
});

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct HeaderFlags: u8 {
        const DELETED = 0x01;
        const MAIN_MENU = 0x02;
    }
}

/// Pulldown colours, carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulldownColors {
    pub title: u8,
    pub main: [u8; 6],
    pub item: [u8; 6],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuHeader {
    pub signature: String,
    pub version: u16,
    pub flags: HeaderFlags,
    pub numbers_mode: NumbersMode,
    pub logging_mode: LoggingMode,
    pub force_help: ForceHelp,
    pub allowed_menu_type: AllowedMenuType,
    pub colors: PulldownColors,
    pub title: String,
    pub password: String,
    pub min_sl: u16,
    pub min_dsl: u16,
    pub ar_mask: u16,
    pub dar_mask: u16,
    pub restrict_mask: u16,
    pub sysop_only: bool,
    pub cosysop_only: bool,
    pub entry_script: String,
    pub exit_script: String,
}

impl Default for MenuHeader {
    fn default() -> MenuHeader {
        MenuHeader {
            signature: MENU_SIGNATURE.to_string(),
            version: MENU_VERSION,
            flags: HeaderFlags::empty(),
            numbers_mode: NumbersMode::Nothing,
            logging_mode: LoggingMode::None,
            force_help: ForceHelp::DontForce,
            allowed_menu_type: AllowedMenuType::Regular,
            colors: PulldownColors::default(),
            title: String::new(),
            password: String::new(),
            min_sl: 0,
            min_dsl: 0,
            ar_mask: 0,
            dar_mask: 0,
            restrict_mask: 0,
            sysop_only: false,
            cosysop_only: false,
            entry_script: String::new(),
            exit_script: String::new(),
        }
    }
}

impl MenuHeader {
    pub fn is_deleted(&self) -> bool {
        self.flags.contains(HeaderFlags::DELETED)
    }

    pub fn is_main_menu(&self) -> bool {
        self.flags.contains(HeaderFlags::MAIN_MENU)
    }

    pub fn decode(bytes: &[u8]) -> Result<MenuHeader, DecodeError> {
        let mut r = FieldReader::new(0, bytes)?;
        let signature = r.string("signature", 10)?;
        if !signature.starts_with("WWIV") {
            return Err(DecodeError::BadSignature(signature));
        }
        let version = r.u16()?;
        let _head_bytes = r.u16()?;
        let _body_bytes = r.u16()?;
        let flags = HeaderFlags::from_bits_truncate(r.u8()?);
        r.skip(1);
        let numbers_mode = NumbersMode::from_byte(r.u8()?)?;
        let logging_mode = LoggingMode::from_byte(r.u8()?)?;
        let force_help = ForceHelp::from_byte(r.u8()?)?;
        let allowed_menu_type = AllowedMenuType::from_byte(r.u8()?)?;
        let colors = PulldownColors {
            title: r.u8()?,
            main: r.bytes()?,
            item: r.bytes()?,
        };
        let title = r.string("title", 21)?;
        r.skip(60);
        let password = r.string("password", MAX_PASSWORD_LEN + 1)?;
        let min_sl = r.u16()?;
        let min_dsl = r.u16()?;
        let ar_mask = r.u16()?;
        let dar_mask = r.u16()?;
        let restrict_mask = r.u16()?;
        let sysop_only = r.flag()?;
        let cosysop_only = r.flag()?;
        r.skip(30);
        let entry_script = r.string("entry_script", MAX_SCRIPT_LEN + 1)?;
        let exit_script = r.string("exit_script", MAX_SCRIPT_LEN + 1)?;
        Ok(MenuHeader {
            signature,
            version,
            flags,
            numbers_mode,
            logging_mode,
            force_help,
            allowed_menu_type,
            colors,
            title,
            password,
            min_sl,
            min_dsl,
            ar_mask,
            dar_mask,
            restrict_mask,
            sysop_only,
            cosysop_only,
            entry_script,
            exit_script,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut w = FieldWriter::new();
        w.string(&self.signature, 10);
        w.u16(self.version);
        w.u16(RECORD_SIZE as u16);
        w.u16(RECORD_SIZE as u16);
        w.u8(self.flags.bits());
        w.skip(1);
        w.u8(self.numbers_mode.to_byte());
        w.u8(self.logging_mode.to_byte());
        w.u8(self.force_help.to_byte());
        w.u8(self.allowed_menu_type.to_byte());
        w.u8(self.colors.title);
        w.bytes(&self.colors.main);
        w.bytes(&self.colors.item);
        w.string(&self.title, 21);
        w.skip(60);
        w.string(&self.password, MAX_PASSWORD_LEN + 1);
        w.u16(self.min_sl);
        w.u16(self.min_dsl);
        w.u16(self.ar_mask);
        w.u16(self.dar_mask);
        w.u16(self.restrict_mask);
        w.flag(self.sysop_only);
        w.flag(self.cosysop_only);
        w.skip(30);
        w.string(&self.entry_script, MAX_SCRIPT_LEN + 1);
        w.string(&self.exit_script, MAX_SCRIPT_LEN + 1);
        w.finish()
    }
}
