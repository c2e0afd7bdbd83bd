use std::io::Write;

use expr_core::lexer::prelude::{Lexer, TokenKind};

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
    let stdin = std::io::stdin();

    loop {
        let mut input = String::from("");

        print!("{}", PROMPT);
        std::io::stdout().flush()?;

        if stdin.read_line(&mut input)? == 0 {
            return Ok(());
        }

        if let Some('\n') = input.chars().next_back() {
            input.pop();
        }
        if let Some('\r') = input.chars().next_back() {
            input.pop();
        }

        match input.as_str() {
            "" => {},
            ".exit" => return Ok(()),
            _ => {
                let mut lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));

                while let Some((_, token, _)) = lexer.next_token() {
                    println!("{token}");

                    if token.kind == TokenKind::EndOfInput {
                        break;
                    }
                }

                for anomaly in lexer.take_anomalies() {
                    let (message, extra) = anomaly.details();

                    println!("[line {}] Lexical anomaly: {}", anomaly.line, message);
                    if extra.len() > 0 {
                        println!("{}", extra.join("\n"));
                    }
                }
            }
        }
    }
}
