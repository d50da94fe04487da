/// Punctuation problems found while parsing a statement. None of these stop
/// the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    ExpectedEol,
    TooManyParameters,
    ExpectedEolAfterParen,
    MissingCloseParen,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let msg = match self {
            Diagnostic::ExpectedEol => "Expected EOL",
            Diagnostic::TooManyParameters => "Too many parameters in line of code",
            Diagnostic::ExpectedEolAfterParen => {
                "Invalid code, expected EOL after close parentheses"
            }
            Diagnostic::MissingCloseParen => "Unexpected end of line (wanted a close parentheses)",
        };
        write!(f, "{}", msg)
    }
}
