use std::path::Path;

use crate::{
    environment::prelude::Environment,
    eval::eval,
    lexer::prelude::{Lexer, Spanned},
    parser::prelude::Parser,
    utils::prelude::{Error, LexWarningEmitter, WarningEmitter},
};
use super::statement::{split_statements, Statement, StatementKind};

#[derive(Debug)]
pub struct RunOutcome {
    pub env: Environment,
    pub output: String,
    pub last_expression: Option<String>,
}

// Bindings made before a failing statement stay visible, so a failed run
// hands back what it managed to do alongside the error.
#[derive(Debug)]
pub enum Outcome {
    Ok(RunOutcome),
    PartialFailure(RunOutcome, Error),
}

pub struct Runner<'a> {
    path: &'a Path,
    src: &'a str,
    warnings: LexWarningEmitter,

    env: Environment,
    output: String,
    last_expression: Option<String>,
}

impl<'a> Runner<'a> {
    pub fn new(path: &'a Path, src: &'a str, warnings: WarningEmitter) -> Self {
        let warnings = LexWarningEmitter::new(
            path.to_path_buf(),
            src.to_string(),
            warnings
        );

        Self {
            path,
            src,
            warnings,

            env: Environment::new(),
            output: String::new(),
            last_expression: None,
        }
    }

    pub fn run(mut self) -> Outcome {
        for statement in split_statements(self.src) {
            if let Err(error) = self.run_statement(&statement) {
                return Outcome::PartialFailure(self.into_outcome(), error);
            }
        }

        Outcome::Ok(self.into_outcome())
    }

    fn run_statement(&mut self, statement: &Statement<'_>) -> Result<(), Error> {
        let tokens = self.expression_tokens(statement);

        let parsed = Parser::new(tokens.into_iter())
            .parse()
            .map_err(|error| Error::Parse {
                path: self.path.to_path_buf(),
                src: self.src.to_string(),
                error,
            })?;

        let value = eval(&parsed, &self.env)
            .map_err(|error| Error::Runtime { error })?;

        match statement.kind {
            StatementKind::Assignment { name } => {
                self.env.set(name, value);
                self.last_expression = Some(statement.expr.to_string());
            },
            StatementKind::Print => {
                self.output.push_str(&format!("{value}\n"));
            },
            StatementKind::Expression => {
                // evaluated for validation only; the value is dropped
                self.last_expression = Some(statement.expr.to_string());
            }
        }

        Ok(())
    }

    // The char offsets fed to the lexer are shifted by the statement's
    // position, keeping every token span absolute within the submission.
    fn expression_tokens(&mut self, statement: &Statement<'_>) -> Vec<Spanned> {
        let offset = statement.offset;
        let mut lexer = Lexer::new(
            statement.expr
                .char_indices()
                .map(move |(i, c)| (i as u32 + offset, c))
        );

        let tokens = lexer.by_ref().collect::<Vec<Spanned>>();

        for anomaly in lexer.take_anomalies() {
            self.warnings.emit(anomaly);
        }

        tokens
    }

    fn into_outcome(self) -> RunOutcome {
        RunOutcome {
            env: self.env,
            output: self.output,
            last_expression: self.last_expression,
        }
    }
}
