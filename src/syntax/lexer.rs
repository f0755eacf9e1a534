use super::lexeme::Lexeme;
use super::span::{Span, Spanned};
use crate::diagnostic::Diagnostic;

pub(crate) struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source: source.as_bytes(),
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn tokenize(mut self) -> (Vec<Spanned<Lexeme>>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token();
            let is_eof = tok.node == Lexeme::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        (tokens, self.diagnostics)
    }

    fn next_token(&mut self) -> Spanned<Lexeme> {
        loop {
            self.skip_whitespace_and_comments();

            if self.pos >= self.source.len() {
                return self.make_token(Lexeme::Eof, self.pos, self.pos);
            }

            let start = self.pos;
            let ch = self.source[self.pos];

            if ch.is_ascii_digit() {
                return self.scan_atom();
            }

            self.pos += 1;
            match ch {
                b'[' => return self.make_token(Lexeme::LBracket, start, self.pos),
                b']' => return self.make_token(Lexeme::RBracket, start, self.pos),
                _ => self.unexpected(start),
            }
        }
    }

    /// Whitespace and `::` line comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.pos < self.source.len() && self.source[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }

            if self.source[self.pos..].starts_with(b"::") {
                while self.pos < self.source.len() && self.source[self.pos] != b'\n' {
                    self.pos += 1;
                }
                continue;
            }

            break;
        }
    }

    fn scan_atom(&mut self) -> Spanned<Lexeme> {
        let start = self.pos;
        while self.pos < self.source.len() && self.source[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        // Only ASCII digits were consumed.
        let text = String::from_utf8_lossy(&self.source[start..self.pos]);
        match text.parse::<u64>() {
            Ok(n) => self.make_token(Lexeme::Atom(n), start, self.pos),
            Err(_) => {
                self.diagnostics.push(
                    Diagnostic::error(
                        format!("atom '{}' is too large", text),
                        Span::new(start as u32, self.pos as u32),
                    )
                    .with_help(format!("atoms are limited to {}", u64::MAX)),
                );
                self.make_token(Lexeme::Atom(0), start, self.pos)
            }
        }
    }

    /// Record an unexpected character, skipping the whole UTF-8 sequence.
    fn unexpected(&mut self, start: usize) {
        while self.pos < self.source.len() && (self.source[self.pos] & 0xC0) == 0x80 {
            self.pos += 1;
        }
        let text = String::from_utf8_lossy(&self.source[start..self.pos]);
        self.diagnostics.push(
            Diagnostic::error(
                format!("unexpected character '{}'", text),
                Span::new(start as u32, self.pos as u32),
            )
            .with_help("nouns are written with decimal atoms and [ ] brackets".to_string()),
        );
    }

    fn make_token(&self, node: Lexeme, start: usize, end: usize) -> Spanned<Lexeme> {
        Spanned::new(node, Span::new(start as u32, end as u32))
    }
}
