use super::{Diagnostic, MAX_COMMAND_LEN, MAX_PARAM_LEN};
use std::iter::Peekable;
use std::str::CharIndices;

/// One command with its two (possibly empty) parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statement {
    pub command: String,
    pub param1: String,
    pub param2: String,
}

impl Statement {
    pub fn new(command: &str, param1: &str, param2: &str) -> Statement {
        Statement {
            command: command.to_string(),
            param1: param1.to_string(),
            param2: param2.to_string(),
        }
    }

    /// An empty command marks the end of a script.
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}({:?}, {:?})", self.command, self.param1, self.param2)
    }
}

/// Result of parsing the first statement of a script. `rest` starts at the
/// next statement with separators already skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<'a> {
    pub statement: Statement,
    pub rest: &'a str,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn parse_statement(text: &str) -> Parsed<'_> {
    StatementParser::new(text).parse()
}

fn is_script_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

struct StatementParser<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> StatementParser<'a> {
    fn new(text: &'a str) -> StatementParser<'a> {
        StatementParser {
            text,
            chars: text.char_indices().peekable(),
            diagnostics: vec![],
        }
    }

    fn parse(mut self) -> Parsed<'a> {
        self.skip_separators();
        let command = self.command();
        if command.is_empty() {
            return self.finish(Statement::default());
        }
        self.skip_whitespace();
        let paren = self.peek() == Some('(');
        if paren {
            self.bump();
            self.skip_whitespace();
        }
        let param1 = self.param();
        self.skip_whitespace();
        if paren {
            self.paren_check(true);
        }
        let param2 = self.param();
        self.skip_whitespace();
        if paren {
            self.paren_check(false);
        }
        self.skip_whitespace();
        if !self.at_end_of_statement() {
            self.diagnostics.push(Diagnostic::ExpectedEol);
        }
        self.finish(Statement {
            command,
            param1,
            param2,
        })
    }

    fn finish(mut self, statement: Statement) -> Parsed<'a> {
        self.skip_separators();
        let pos = self.position();
        let text = self.text;
        Parsed {
            statement,
            rest: &text[pos..],
            diagnostics: self.diagnostics,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn bump(&mut self) {
        self.chars.next();
    }

    fn position(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(pos, _)) => pos,
            None => self.text.len(),
        }
    }

    fn at_end_of_statement(&mut self) -> bool {
        matches!(self.peek(), None | Some('~'))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !is_script_whitespace(c) {
                break;
            }
            self.bump();
        }
    }

    fn skip_separators(&mut self) {
        self.skip_whitespace();
        while self.peek() == Some('~') {
            self.bump();
            self.skip_whitespace();
        }
    }

    fn command(&mut self) -> String {
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if !c.is_ascii_alphanumeric() {
                break;
            }
            if s.len() < MAX_COMMAND_LEN {
                s.push(c);
            }
            self.bump();
        }
        s
    }

    // Bare parameters end only at a space, `~` or the end of the text, so
    // `cmd(foo, bar)` keeps the comma in "foo,".
    fn param(&mut self) -> String {
        self.skip_whitespace();
        let mut s = String::new();
        if self.at_end_of_statement() {
            return s;
        }
        let mut len = 0;
        if self.peek() == Some('"') {
            self.bump();
            while let Some(c) = self.peek() {
                self.bump();
                if c == '"' {
                    break;
                }
                if len < MAX_PARAM_LEN {
                    s.push(c);
                    len += 1;
                }
            }
        } else {
            while let Some(c) = self.peek() {
                if c == ' ' || c == '~' {
                    break;
                }
                if len < MAX_PARAM_LEN {
                    s.push(c);
                    len += 1;
                }
                self.bump();
            }
        }
        s
    }

    fn paren_check(&mut self, more: bool) {
        match self.peek() {
            Some(',') => {
                if !more {
                    self.diagnostics.push(Diagnostic::TooManyParameters);
                }
                self.bump();
                self.skip_whitespace();
            }
            Some(')') => {
                self.bump();
                self.skip_whitespace();
                if !self.at_end_of_statement() {
                    self.diagnostics.push(Diagnostic::ExpectedEolAfterParen);
                }
            }
            None | Some('~') => self.diagnostics.push(Diagnostic::MissingCloseParen),
            Some(_) => {}
        }
    }
}
