use super::lexeme::Lexeme;
use super::span::{Span, Spanned};
use crate::diagnostic::Diagnostic;
use crate::noun::Noun;

const MAX_NESTING_DEPTH: u32 = 1024;

/// Recursive-descent reader: one noun per input.
///
/// `[a b c]` reads as `[a [b c]]`. A bracket holds at least two nouns.
pub(crate) struct Parser {
    tokens: Vec<Spanned<Lexeme>>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    depth: u32,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Spanned<Lexeme>>) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
            depth: 0,
        }
    }

    pub(crate) fn parse_program(mut self) -> Result<Noun, Vec<Diagnostic>> {
        let noun = self.parse_noun();
        if noun.is_some() && !self.at(&Lexeme::Eof) {
            self.error_with_help(
                &format!("unexpected {} after a complete noun", self.peek().description()),
                "wrap several nouns in brackets to make a cell: `[a b]`",
            );
        }
        match noun {
            Some(noun) if self.diagnostics.is_empty() => Ok(noun),
            _ => Err(self.diagnostics),
        }
    }

    fn parse_noun(&mut self) -> Option<Noun> {
        match *self.peek() {
            Lexeme::Atom(n) => {
                self.advance();
                Some(Noun::atom(n))
            }
            Lexeme::LBracket => self.parse_cell(),
            _ => {
                self.error_at_current(&format!(
                    "expected atom or '[', found {}",
                    self.peek().description()
                ));
                None
            }
        }
    }

    fn parse_cell(&mut self) -> Option<Noun> {
        let open = self.current_span();
        self.advance();
        if !self.enter_nesting() {
            return None;
        }

        let mut elements = Vec::new();
        while !self.at(&Lexeme::RBracket) {
            if self.at(&Lexeme::Eof) {
                self.diagnostics.push(
                    Diagnostic::error("unclosed '['".to_string(), open)
                        .with_help("add a matching ']'".to_string()),
                );
                return None;
            }
            elements.push(self.parse_noun()?);
        }
        let close = self.current_span();
        self.advance();
        self.exit_nesting();

        if elements.len() < 2 {
            self.diagnostics.push(
                Diagnostic::error(
                    format!("a cell needs at least two nouns, found {}", elements.len()),
                    open.merge(close),
                )
                .with_note("`[a b c]` is read as `[a [b c]]`".to_string()),
            );
            return None;
        }
        Noun::list(&elements)
    }

    fn enter_nesting(&mut self) -> bool {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            self.error_with_help(
                "nesting depth exceeded (maximum 1024 levels)",
                "flatten right-nested cells: `[a [b [c d]]]` can be written `[a b c d]`",
            );
            return false;
        }
        true
    }

    fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    // --- Utility methods ---

    fn peek(&self) -> &Lexeme {
        &self.tokens[self.pos].node
    }

    fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
    }

    fn at(&self, token: &Lexeme) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    fn error_at_current(&mut self, msg: &str) {
        self.diagnostics
            .push(Diagnostic::error(msg.to_string(), self.current_span()));
    }

    fn error_with_help(&mut self, msg: &str, help: &str) {
        self.diagnostics.push(
            Diagnostic::error(msg.to_string(), self.current_span()).with_help(help.to_string()),
        );
    }
}
