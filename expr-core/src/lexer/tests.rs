use super::prelude::{tokenize, Lexer, Token, TokenKind};

fn lexer_for(input: &str) -> Lexer<impl Iterator<Item = (u32, char)> + '_> {
    Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)))
}

fn tok(kind: TokenKind, text: &str, line: u32) -> Token {
    Token {
        kind,
        text: text.to_string(),
        line,
    }
}

#[test]
fn test_assignment_tokens() {
    let tokens = tokenize("a=1+2");

    let expected = vec![
        tok(TokenKind::Identifier, "a", 1),
        tok(TokenKind::Operator, "=", 1),
        tok(TokenKind::Number, "1", 1),
        tok(TokenKind::Operator, "+", 1),
        tok(TokenKind::Number, "2", 1),
    ];

    assert_eq!(tokens, expected);
    assert!(tokens.iter().all(|token| token.kind != TokenKind::Unknown));
}

#[test]
fn test_classification_priority() {
    let input = "si x imprime verdadero , ( ) ^ | 3.14 10";

    let tokens = tokenize(input);

    let expected = vec![
        tok(TokenKind::ReservedWord, "si", 1),
        tok(TokenKind::Identifier, "x", 1),
        tok(TokenKind::ReservedWord, "imprime", 1),
        tok(TokenKind::ReservedWord, "verdadero", 1),
        tok(TokenKind::Punctuation, ",", 1),
        tok(TokenKind::Punctuation, "(", 1),
        tok(TokenKind::Punctuation, ")", 1),
        tok(TokenKind::Operator, "^", 1),
        tok(TokenKind::Operator, "|", 1),
        tok(TokenKind::Number, "3.14", 1),
        tok(TokenKind::Number, "10", 1),
    ];

    for (idx, (token, expected)) in tokens.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            token, expected,
            "Token does not match expected token ({:?}, {:?}) at {}",
            token, expected, idx
        );
    }

    assert_eq!(tokens.len(), expected.len());
}

#[test]
fn test_newline_collapsing() {
    // the blank lines in the middle yield a single newline token, tagged
    // with the line it ends
    let tokens = tokenize("a\n\n\nb");

    let expected = vec![
        tok(TokenKind::Identifier, "a", 1),
        tok(TokenKind::Punctuation, "\n", 1),
        tok(TokenKind::Identifier, "b", 4),
    ];

    assert_eq!(tokens, expected);
}

#[test]
fn test_no_leading_newline_token() {
    let tokens = tokenize("\n\nx = 1");

    assert_eq!(tokens[0], tok(TokenKind::Identifier, "x", 3));
    assert!(tokens.iter().all(|token| !token.is_punctuation("\n")));
}

#[test]
fn test_stream_ends_with_end_of_input() {
    let mut lexer = lexer_for("a + b");

    let mut last = None;
    while let Some((_, token, _)) = lexer.next_token() {
        last = Some(token);
    }

    assert_eq!(last, Some(Token::end_of_input(1)));
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn test_unknown_lexeme_keeps_scanning() {
    let mut lexer = lexer_for("1.2.3 + $ + x");

    let tokens = lexer.by_ref()
        .map(|(_, token, _)| token)
        .collect::<Vec<Token>>();

    let expected = vec![
        tok(TokenKind::Unknown, "1.2.3", 1),
        tok(TokenKind::Operator, "+", 1),
        tok(TokenKind::Unknown, "$", 1),
        tok(TokenKind::Operator, "+", 1),
        tok(TokenKind::Identifier, "x", 1),
        Token::end_of_input(1),
    ];

    assert_eq!(tokens, expected);

    let anomalies = lexer.take_anomalies();
    assert_eq!(anomalies.len(), 2);
    assert_eq!(anomalies[0].lexeme, "1.2.3");
    assert_eq!(anomalies[1].lexeme, "$");
}

#[test]
fn test_malformed_numbers_are_unknown() {
    for input in [".5", "5.", "1.2.3", "12a.4"] {
        let tokens = tokenize(input);

        assert_eq!(
            tokens,
            vec![tok(TokenKind::Unknown, input, 1)],
            "`{input}` should classify as a single Unknown token"
        );
    }
}

#[test]
fn test_round_trip() {
    // concatenating token texts reproduces the non-whitespace input
    for input in ["( 1.5+x )*y", "a = 1 + 2", "8-4-2", "x1 / 0.25"] {
        let rebuilt = tokenize(input)
            .iter()
            .map(|token| token.text.as_str())
            .collect::<String>();

        let squeezed = input
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>();

        assert_eq!(rebuilt, squeezed, "round trip failed for `{input}`");
    }
}

#[test]
fn test_spans_cover_lexemes() {
    let lexer = lexer_for("ab = 12");

    let spans = lexer
        .map(|(start, token, end)| (start, token.text.len() as u32, end))
        .collect::<Vec<(u32, u32, u32)>>();

    for (start, len, end) in &spans {
        assert_eq!(start + len, *end);
    }

    assert_eq!(spans.first(), Some(&(0, 2, 2)));
    assert_eq!(spans.last(), Some(&(7, 0, 7)));
}
