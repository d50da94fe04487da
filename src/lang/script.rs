use super::{parse_statement, Parsed, MAX_SCRIPT_TEXT};

/// Iterates the statements of a script until the text runs out or a
/// statement has no command.
#[derive(Debug, Clone)]
pub struct Script<'a> {
    rest: &'a str,
}

impl<'a> Script<'a> {
    pub fn new(text: &'a str) -> Script<'a> {
        let end = match text.char_indices().nth(MAX_SCRIPT_TEXT) {
            Some((pos, _)) => pos,
            None => text.len(),
        };
        Script { rest: &text[..end] }
    }
}

impl<'a> Iterator for Script<'a> {
    type Item = Parsed<'a>;

    fn next(&mut self) -> Option<Parsed<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        let parsed = parse_statement(self.rest);
        if parsed.statement.is_empty() {
            self.rest = "";
            return None;
        }
        self.rest = parsed.rest;
        Some(parsed)
    }
}
