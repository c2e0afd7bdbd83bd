pub mod runner;
pub mod statement;

pub mod prelude {
    pub use super::{
        runner::*,
        statement::*
    };
}

use std::path::PathBuf;
use std::rc::Rc;

use utf8_chars::BufReadCharsExt;

use crate::{
    lexer::prelude::{Lexer, Token, TokenKind},
    utils::prelude::{Error, WarningEmitter, WarningEmitterIO},
};
use self::runner::{Outcome, Runner};

pub fn run_source(
    path: PathBuf,
    src: &str,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Outcome {
    let warnings = WarningEmitter::new(warnings);

    Runner::new(&path, src, warnings).run()
}

pub fn run_file(
    path: PathBuf,
    warnings: Rc<dyn WarningEmitterIO>,
) -> Result<Outcome, Error> {
    let src = match std::fs::read_to_string(&path) {
        Ok(src) => src,
        Err(err) => return Err(Error::StdIo { err: err.kind() })
    };

    Ok(run_source(path, &src, warnings))
}

pub fn tokenize_file(path: PathBuf) -> Result<Vec<Token>, Error> {
    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(err) => return Err(Error::StdIo { err: err.kind() })
    };

    let mut reader = std::io::BufReader::new(file);
    let stream = reader.chars()
        .map(|ch| ch.expect("reading utf-8 character"))
        .scan(0u32, |pos, ch| {
            let start = *pos;
            *pos += ch.len_utf8() as u32;

            Some((start, ch))
        });

    let tokens = Lexer::new(stream)
        .map(|(_, token, _)| token)
        .take_while(|token| token.kind != TokenKind::EndOfInput)
        .collect();

    Ok(tokens)
}

#[cfg(test)]
mod tests;
