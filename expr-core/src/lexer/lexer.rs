use super::error::LexicalAnomaly;
use super::token::{
    is_identifier, is_number, is_operator_char, is_punctuation_char,
    is_reserved_word, Token, TokenKind,
};
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);

// Characters that end the pending lexeme. The non-whitespace ones become
// tokens of their own; whitespace only flushes.
fn is_separator_char(ch: char) -> bool {
    is_operator_char(ch) || matches!(ch, ',' | '(' | ')')
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
    input: T,
    ch: Option<(u32, char)>,
    position: u32,
    line: u32,

    pending: String,
    pending_start: u32,
    queued: Option<Spanned>,
    last_was_newline: bool,
    eof_emitted: bool,

    anomalies: Vec<LexicalAnomaly>,
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
    pub fn new(mut input: T) -> Self {
        let ch = input.next();

        Self {
            input,
            ch,
            position: 0,
            line: 1,

            pending: String::new(),
            pending_start: 0,
            queued: None,
            last_was_newline: true,
            eof_emitted: false,

            anomalies: vec![],
        }
    }

    // Collapses newline runs: a newline token never starts the stream and
    // never follows another newline token.
    pub fn next_token(&mut self) -> Option<Spanned> {
        loop {
            let token = self.scan_token()?;
            let is_newline = token.1.is_punctuation("\n");

            if is_newline && self.last_was_newline {
                continue;
            }

            self.last_was_newline = is_newline;
            return Some(token);
        }
    }

    pub fn anomalies(&self) -> &[LexicalAnomaly] {
        &self.anomalies
    }

    pub fn take_anomalies(&mut self) -> Vec<LexicalAnomaly> {
        std::mem::take(&mut self.anomalies)
    }

    fn scan_token(&mut self) -> Option<Spanned> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }

        loop {
            let (pos, ch) = match self.ch {
                Some(ch) => ch,
                None => {
                    if let Some(token) = self.flush_pending() {
                        return Some(token);
                    }
                    if self.eof_emitted {
                        return None;
                    }

                    self.eof_emitted = true;
                    return Some((self.position, Token::end_of_input(self.line), self.position));
                }
            };

            if ch == '\n' {
                // the newline token keeps the line it ends; the counter
                // moves only after classification
                let flushed = self.flush_pending();
                let newline = self.single_char_token(pos, ch);
                self.consume();
                self.line += 1;

                return match flushed {
                    Some(token) => {
                        self.queued = Some(newline);
                        Some(token)
                    },
                    None => Some(newline)
                };
            } else if ch.is_ascii_whitespace() {
                self.consume();

                if let Some(token) = self.flush_pending() {
                    return Some(token);
                }
            } else if is_separator_char(ch) {
                let flushed = self.flush_pending();
                let separator = self.single_char_token(pos, ch);
                self.consume();

                return match flushed {
                    Some(token) => {
                        self.queued = Some(separator);
                        Some(token)
                    },
                    None => Some(separator)
                };
            } else if ch.is_ascii_alphanumeric() || ch == '.' {
                if self.pending.is_empty() {
                    self.pending_start = pos;
                }

                self.pending.push(ch);
                self.consume();
            } else {
                // anything else stands alone and classification decides
                // what to call it
                let flushed = self.flush_pending();
                let other = self.single_char_token(pos, ch);
                self.consume();

                return match flushed {
                    Some(token) => {
                        self.queued = Some(other);
                        Some(token)
                    },
                    None => Some(other)
                };
            }
        }
    }

    fn consume(&mut self) {
        if let Some((pos, ch)) = self.ch {
            self.position = pos + ch.len_utf8() as u32;
        }

        self.ch = self.input.next();
    }

    fn flush_pending(&mut self) -> Option<Spanned> {
        if self.pending.is_empty() {
            return None;
        }

        let lexeme = std::mem::take(&mut self.pending);
        let start = self.pending_start;
        let end = start + lexeme.len() as u32;
        let token = self.classify(lexeme, SrcSpan { start, end });

        Some((start, token, end))
    }

    fn single_char_token(&mut self, pos: u32, ch: char) -> Spanned {
        let end = pos + ch.len_utf8() as u32;
        let token = self.classify(ch.to_string(), SrcSpan { start: pos, end });

        (pos, token, end)
    }

    // Classification order matters: reserved words shadow identifiers, and
    // the operator check runs before the punctuation check.
    fn classify(&mut self, lexeme: String, location: SrcSpan) -> Token {
        let kind = if is_reserved_word(&lexeme) {
            TokenKind::ReservedWord
        } else if is_identifier(&lexeme) {
            TokenKind::Identifier
        } else if is_number(&lexeme) {
            TokenKind::Number
        } else if lexeme.chars().any(is_operator_char) {
            TokenKind::Operator
        } else if lexeme.chars().any(is_punctuation_char) {
            TokenKind::Punctuation
        } else {
            self.anomalies.push(LexicalAnomaly {
                lexeme: lexeme.clone(),
                line: self.line,
                location,
            });

            TokenKind::Unknown
        };

        Token {
            kind,
            text: lexeme,
            line: self.line,
        }
    }
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

// Eagerly drives a lexer over the whole input. The trailing EndOfInput
// marker is dropped; callers that want it drive the lexer themselves.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)))
        .map(|(_, token, _)| token)
        .take_while(|token| token.kind != TokenKind::EndOfInput)
        .collect()
}
