/// Tokens of the bracket notation.
#[derive(Clone, Debug, PartialEq)]
pub enum Lexeme {
    LBracket, // [
    RBracket, // ]
    Atom(u64),
    Eof,
}

impl Lexeme {
    /// Human-readable description for error messages.
    pub fn description(&self) -> String {
        match self {
            Lexeme::LBracket => "'['".to_string(),
            Lexeme::RBracket => "']'".to_string(),
            Lexeme::Atom(n) => format!("atom {}", n),
            Lexeme::Eof => "end of input".to_string(),
        }
    }
}
