use std::path::PathBuf;
use std::rc::Rc;

use crate::{
    eval::RuntimeError,
    parser::prelude::ParseErrorType,
    utils::prelude::{Error, NullWarningEmitterIO, VectorWarningEmitterIO},
};

use super::prelude::{split_statements, Outcome, RunOutcome, StatementKind};
use super::run_source;

fn run(src: &str) -> Outcome {
    run_source(PathBuf::new(), src, Rc::new(NullWarningEmitterIO))
}

fn expect_ok(outcome: Outcome) -> RunOutcome {
    match outcome {
        Outcome::Ok(run) => run,
        Outcome::PartialFailure(_, error) => {
            panic!("expected a clean run, got {error:?}")
        }
    }
}

fn expect_failure(outcome: Outcome) -> (RunOutcome, Error) {
    match outcome {
        Outcome::Ok(run) => panic!("expected a failure, got {run:?}"),
        Outcome::PartialFailure(run, error) => (run, error)
    }
}

#[test]
fn test_assignments_accumulate() {
    let run = expect_ok(run("x = 5\ny = x * 2"));

    assert_eq!(run.env.get("x"), Some(5.0));
    assert_eq!(run.env.get("y"), Some(10.0));
    assert_eq!(run.env.len(), 2);

    let bindings = run.env.bindings().collect::<Vec<(&str, f64)>>();
    assert_eq!(bindings, vec![("x", 5.0), ("y", 10.0)]);
}

#[test]
fn test_print_output_accumulates() {
    let run = expect_ok(run("a = 2; cout<<a*3; cout<<a+1"));

    assert_eq!(run.output, "6\n3\n");
}

#[test]
fn test_no_print_output() {
    let run = expect_ok(run("a = 1; a + 1"));

    assert!(run.output.is_empty());
}

#[test]
fn test_division_by_zero_aborts() {
    let (run, error) = expect_failure(run("cout<<7/0"));

    assert_eq!(
        error,
        Error::Runtime {
            error: RuntimeError::DivisionByZero
        }
    );
    assert!(run.env.is_empty());
    assert!(run.output.is_empty());
}

#[test]
fn test_failure_keeps_earlier_bindings() {
    let (run, error) = expect_failure(run("a = 1; z = q + 1; b = 2"));

    assert_eq!(
        error,
        Error::Runtime {
            error: RuntimeError::UndefinedVariable {
                name: "q".to_string()
            }
        }
    );

    // everything before the failing statement survives, nothing after runs
    assert_eq!(run.env.get("a"), Some(1.0));
    assert_eq!(run.env.get("z"), None);
    assert_eq!(run.env.get("b"), None);
}

#[test]
fn test_unbalanced_paren_is_a_syntax_error() {
    let (run, error) = expect_failure(run("x = 5; y = (1+2"));

    assert_eq!(run.env.get("x"), Some(5.0));

    match error {
        Error::Parse { error, .. } => {
            assert_eq!(error.error, ParseErrorType::MissingClosingParen);
            // spans point into the whole submission, not the statement
            assert_eq!(error.span.start, 15);
        },
        other => panic!("expected a parse error, got {other:?}")
    }
}

#[test]
fn test_reassignment_overwrites() {
    let run = expect_ok(run("x = 1; x = x + 1; x = x * 10"));

    assert_eq!(run.env.get("x"), Some(20.0));
    assert_eq!(run.env.len(), 1);
}

#[test]
fn test_last_expression_skips_prints() {
    let run = expect_ok(run("x = 5; x*2; cout<<x"));

    assert_eq!(run.last_expression.as_deref(), Some("x*2"));
}

#[test]
fn test_statement_classification() {
    let statements = split_statements(" x = 5 ; cout<<x*2 \n y + 1;;");

    assert_eq!(statements.len(), 3);

    assert_eq!(statements[0].kind, StatementKind::Assignment { name: "x" });
    assert_eq!(statements[0].expr, "5");

    assert_eq!(statements[1].kind, StatementKind::Print);
    assert_eq!(statements[1].expr, "x*2");

    assert_eq!(statements[2].kind, StatementKind::Expression);
    assert_eq!(statements[2].expr, "y + 1");
}

#[test]
fn test_empty_submission() {
    let run = expect_ok(run(";;;\n\n"));

    assert!(run.env.is_empty());
    assert!(run.output.is_empty());
    assert_eq!(run.last_expression, None);
}

#[test]
fn test_spaced_print_marker_is_not_a_print() {
    // `cout << x` does not match the marker and falls through to the
    // expression pipeline, which rejects the `<`
    let (_, error) = expect_failure(run("cout << 5"));

    assert!(matches!(error, Error::Parse { .. }));
}

#[test]
fn test_unknown_lexeme_is_warned_and_fails() {
    let warnings = Rc::new(VectorWarningEmitterIO::new());

    let outcome = run_source(PathBuf::new(), "v = 1.2.3", warnings.clone());
    let (_, error) = expect_failure(outcome);

    match error {
        Error::Parse { error, .. } => assert_eq!(
            error.error,
            ParseErrorType::UnknownLexeme {
                lexeme: "1.2.3".to_string()
            }
        ),
        other => panic!("expected a parse error, got {other:?}")
    }

    assert_eq!(warnings.take().len(), 1);
}
