use crate::lexer::prelude::{Lexer, Spanned, Token, TokenKind};
use crate::utils::prelude::SrcSpan;
use super::ast::Expr;
use super::error::{parse_error, ParseError, ParseErrorType};

pub struct Parser<T: Iterator<Item = Spanned>> {
    current: Spanned,
    tokens: T,
}

impl<T: Iterator<Item = Spanned>> Parser<T> {
    pub fn new(mut tokens: T) -> Self {
        let current = tokens.next().unwrap_or((0, Token::end_of_input(1), 0));

        Self { current, tokens }
    }

    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let parsed = self.expr()?;

        // the stream must be fully consumed for the parse to count
        match self.current.1.kind {
            TokenKind::EndOfInput => Ok(parsed),
            _ => parse_error(
                ParseErrorType::UnexpectedToken {
                    token: self.current.1.clone(),
                    expected: vec!["end of input".into()],
                },
                self.span()
            )
        }
    }

    // expr -> term [ (+ | -) expr ]
    fn expr(&mut self) -> Result<Expr, ParseError> {
        let left = self.term()?;

        self.expr_rest(left)
    }

    // the continuation recurses into expr itself, not into term, which is
    // what makes `+` and `-` right-associative
    fn expr_rest(&mut self, left: Expr) -> Result<Expr, ParseError> {
        if self.current.1.is_operator("+") || self.current.1.is_operator("-") {
            let (_, op, _) = self.step();
            let right = self.expr()?;

            return Ok(Expr::binary(op.text, left, right));
        }

        // epsilon
        if self.current.1.is_punctuation(")") || self.current.1.kind == TokenKind::EndOfInput {
            return Ok(left);
        }

        parse_error(
            ParseErrorType::UnexpectedToken {
                token: self.current.1.clone(),
                expected: vec![
                    "`+`".into(),
                    "`-`".into(),
                    "`)`".into(),
                    "end of input".into()
                ],
            },
            self.span()
        )
    }

    // term -> factor [ (* | /) term ]
    fn term(&mut self) -> Result<Expr, ParseError> {
        let left = self.factor()?;

        self.term_rest(left)
    }

    fn term_rest(&mut self, left: Expr) -> Result<Expr, ParseError> {
        if self.current.1.is_operator("*") || self.current.1.is_operator("/") {
            let (_, op, _) = self.step();
            let right = self.term()?;

            return Ok(Expr::binary(op.text, left, right));
        }

        // epsilon: a sum operator hands control back to expr_rest
        if self.current.1.is_operator("+")
            || self.current.1.is_operator("-")
            || self.current.1.is_punctuation(")")
            || self.current.1.kind == TokenKind::EndOfInput
        {
            return Ok(left);
        }

        parse_error(
            ParseErrorType::UnexpectedToken {
                token: self.current.1.clone(),
                expected: vec![
                    "`*`".into(),
                    "`/`".into(),
                    "`+`".into(),
                    "`-`".into(),
                    "`)`".into(),
                    "end of input".into()
                ],
            },
            self.span()
        )
    }

    // factor -> ( expr ) | NUMBER | IDENTIFIER
    fn factor(&mut self) -> Result<Expr, ParseError> {
        if self.current.1.is_punctuation("(") {
            self.step();
            let inner = self.expr()?;

            if self.current.1.is_punctuation(")") {
                self.step();
                return Ok(inner);
            }

            return parse_error(ParseErrorType::MissingClosingParen, self.span());
        }

        match self.current.1.kind {
            TokenKind::Number => {
                let (start, token, end) = self.step();

                match token.text.parse::<f64>() {
                    Ok(value) => Ok(Expr::Number { value }),
                    Err(_) => parse_error(
                        ParseErrorType::InvalidNumber { lexeme: token.text },
                        SrcSpan { start, end }
                    )
                }
            },
            TokenKind::Identifier => {
                let (_, token, _) = self.step();

                Ok(Expr::Variable { name: token.text })
            },
            TokenKind::EndOfInput => parse_error(ParseErrorType::UnexpectedEof, self.span()),
            TokenKind::Unknown => parse_error(
                ParseErrorType::UnknownLexeme {
                    lexeme: self.current.1.text.clone()
                },
                self.span()
            ),
            _ => parse_error(
                ParseErrorType::UnexpectedToken {
                    token: self.current.1.clone(),
                    expected: vec![
                        "`(`".into(),
                        "a number".into(),
                        "an identifier".into()
                    ],
                },
                self.span()
            )
        }
    }

    fn step(&mut self) -> Spanned {
        let next = match self.tokens.next() {
            Some(token) => token,
            None => {
                let end = self.current.2;

                (end, Token::end_of_input(self.current.1.line), end)
            }
        };

        std::mem::replace(&mut self.current, next)
    }

    fn span(&self) -> SrcSpan {
        SrcSpan {
            start: self.current.0,
            end: self.current.2
        }
    }
}

pub fn parse_expression(src: &str) -> Result<Expr, ParseError> {
    let tokens = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)))
        .collect::<Vec<Spanned>>();

    Parser::new(tokens.into_iter()).parse()
}
