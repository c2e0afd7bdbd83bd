use crate::{lexer::prelude::{Token, TokenKind}, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    UnexpectedToken {
        token: Token,
        expected: Vec<String>,
    },
    UnexpectedEof,
    MissingClosingParen,
    UnknownLexeme {
        lexeme: String
    },
    InvalidNumber {
        lexeme: String
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub error: ParseErrorType,
    pub span: SrcSpan
}

impl ParseError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            ParseErrorType::UnexpectedToken { token, expected } => {
                let found = match token.kind {
                    TokenKind::Number => "a number".to_string(),
                    TokenKind::Identifier => "an identifier".to_string(),
                    TokenKind::ReservedWord => format!("the keyword `{}`", token.text),
                    TokenKind::EndOfInput => "the end of the expression".to_string(),
                    _ => format!("`{}`", token.text.escape_default())
                };

                let messages = std::iter::once(format!("Found {found}, expected one of: "))
                    .chain(expected.iter().map(|s| format!("- {s}")))
                    .collect();

                ("Not expected this", messages)
            },
            ParseErrorType::UnexpectedEof => ("Unexpected end of expression", vec![]),
            ParseErrorType::MissingClosingParen => ("Missing closing parenthesis", vec![]),
            ParseErrorType::UnknownLexeme { lexeme } => (
                "Unrecognized lexeme",
                vec![format!("`{}` does not match any token class", lexeme)]
            ),
            ParseErrorType::InvalidNumber { lexeme } => (
                "Invalid numeric literal",
                vec![format!("`{}` is not a valid number", lexeme)]
            ),
        }
    }
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
