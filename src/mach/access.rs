use crate::rec::{MenuHeader, MenuItem};

pub const SYSTEM_PASSWORD_SENTINEL: &str = "*SYSTEM";
pub const PASSWORD_PROMPT: &str = "SY: ";

/// The caller as seen by the security checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Principal {
    pub effective_sl: u16,
    pub dsl: u16,
    pub ar_mask: u16,
    pub dar_mask: u16,
    pub restrict_mask: u16,
    pub is_sysop: bool,
    pub is_cosysop: bool,
    pub is_remote: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyScope {
    Header,
    Item,
}

/// Security fields shared by headers and items. A zero maximum is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy<'a> {
    pub scope: PolicyScope,
    pub deleted: bool,
    pub min_sl: u16,
    pub max_sl: u16,
    pub min_dsl: u16,
    pub max_dsl: u16,
    pub ar_mask: u16,
    pub dar_mask: u16,
    pub restrict_mask: u16,
    pub sysop_only: bool,
    pub cosysop_only: bool,
    pub password: &'a str,
}

impl<'a> From<&'a MenuHeader> for Policy<'a> {
    fn from(header: &'a MenuHeader) -> Policy<'a> {
        Policy {
            scope: PolicyScope::Header,
            deleted: header.is_deleted(),
            min_sl: header.min_sl,
            max_sl: 0,
            min_dsl: header.min_dsl,
            max_dsl: 0,
            ar_mask: header.ar_mask,
            dar_mask: header.dar_mask,
            restrict_mask: header.restrict_mask,
            sysop_only: header.sysop_only,
            cosysop_only: header.cosysop_only,
            password: &header.password,
        }
    }
}

impl<'a> From<&'a MenuItem> for Policy<'a> {
    fn from(item: &'a MenuItem) -> Policy<'a> {
        Policy {
            scope: PolicyScope::Item,
            deleted: item.is_deleted(),
            min_sl: item.min_sl,
            max_sl: item.max_sl,
            min_dsl: item.min_dsl,
            max_dsl: item.max_dsl,
            ar_mask: item.ar_mask,
            dar_mask: item.dar_mask,
            restrict_mask: item.restrict_mask,
            sysop_only: item.sysop_only,
            cosysop_only: item.cosysop_only,
            password: &item.password,
        }
    }
}

/// How to ask the caller for a password when a policy carries one.
pub struct Challenge<'a> {
    pub prompt: &'a mut dyn FnMut(&str) -> String,
    pub system_password: &'a str,
}

fn in_range(value: u16, min: u16, max: u16) -> bool {
    value >= min && (max == 0 || value <= max)
}

fn missing_bits(required: u16, held: u16) -> u16 {
    required & !held
}

/// Decides whether `who` may see or run what `policy` guards. Passing a
/// challenge also enforces the password, prompting remote callers only.
pub fn allowed(policy: &Policy, who: &Principal, challenge: Option<Challenge>) -> bool {
    if policy.deleted {
        return false;
    }
    if !in_range(who.effective_sl, policy.min_sl, policy.max_sl)
        || !in_range(who.dsl, policy.min_dsl, policy.max_dsl)
    {
        return false;
    }
    if missing_bits(policy.ar_mask, who.ar_mask) != 0 {
        return false;
    }

    // Headers let a caller with enough DSL through a missing DAR bit or a
    // matching restriction. Items do not.
    let dsl_fallback = policy.scope == PolicyScope::Header && who.dsl >= policy.min_dsl;
    if missing_bits(policy.dar_mask, who.dar_mask) != 0 && !dsl_fallback {
        return false;
    }
    if policy.restrict_mask & who.restrict_mask != 0 && !dsl_fallback {
        return false;
    }

    if (policy.sysop_only && !who.is_sysop) || (policy.cosysop_only && !who.is_cosysop) {
        return false;
    }

    match challenge {
        Some(challenge) if !policy.password.is_empty() && who.is_remote => {
            check_password(policy.password, challenge)
        }
        _ => true,
    }
}

fn check_password(configured: &str, mut challenge: Challenge) -> bool {
    let expected = if configured.eq_ignore_ascii_case(SYSTEM_PASSWORD_SENTINEL) {
        challenge.system_password
    } else {
        configured
    };
    let entered = (challenge.prompt)(PASSWORD_PROMPT);
    !expected.is_empty() && entered.eq_ignore_ascii_case(expected)
}
