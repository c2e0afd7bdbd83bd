mod cli;
mod repl;
mod rlpl;

use std::{path::PathBuf, rc::Rc};

use clap::Parser;
use expr_core::{
    runner::{prelude::Outcome, run_file, tokenize_file},
    utils::prelude::{Error, Warning, WarningEmitterIO},
};

#[derive(Parser)]
enum Command {
    /// Prints the classified token stream of a source file
    Tokenize {
        /// Path of source file
        path: PathBuf,
    },
    /// Runs all statements and reports the resulting variable bindings
    Eval {
        /// Path of source file
        path: PathBuf,
    },
    /// Runs all statements and reports the accumulated cout<< output
    Run {
        /// Path of source file
        path: PathBuf,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Eval Print Loop
    Repl,
}

fn main() {
    match Command::parse() {
        Command::Tokenize { path } => {
            cli::print_tokenizing(&path.display().to_string());
            let start = std::time::Instant::now();

            match tokenize_file(path) {
                Ok(tokens) => {
                    for token in tokens {
                        println!("{token}");
                    }
                },
                Err(err) => print_error(&err)
            }

            cli::print_finished(std::time::Instant::now() - start);
        },
        Command::Eval { path } => {
            let warning_emitter = Rc::new(ConsoleWarningEmitter);

            cli::print_evaluating(&path.display().to_string());
            let start = std::time::Instant::now();

            match run_file(path, warning_emitter) {
                Ok(Outcome::Ok(run)) => {
                    if run.env.is_empty() {
                        println!("(no bindings)");
                    } else {
                        for (name, value) in run.env.bindings() {
                            println!("{name} = {value}");
                        }
                    }
                },
                Ok(Outcome::PartialFailure(_, err)) | Err(err) => print_error(&err)
            }

            cli::print_finished(std::time::Instant::now() - start);
        },
        Command::Run { path } => {
            let warning_emitter = Rc::new(ConsoleWarningEmitter);

            cli::print_running(&path.display().to_string());
            let start = std::time::Instant::now();

            match run_file(path, warning_emitter) {
                Ok(Outcome::Ok(run)) => {
                    if run.output.is_empty() {
                        println!("no cout<< statement produced any output");
                    } else {
                        print!("{}", run.output);
                    }
                },
                Ok(Outcome::PartialFailure(_, err)) | Err(err) => print_error(&err)
            }

            cli::print_finished(std::time::Instant::now() - start);
        },
        Command::Rlpl => {
            install_interrupt_handler();
            let _ = rlpl::start();
        },
        Command::Repl => {
            install_interrupt_handler();
            let _ = repl::start();
        }
    }
}

fn install_interrupt_handler() {
    let _ = ctrlc::set_handler(|| std::process::exit(0));
}

fn print_error(err: &Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    err.pretty(&mut buf);
    buf_writer
        .print(&buf)
        .expect("Writing error to stderr");
}

#[derive(Debug, Clone, Copy)]
pub struct ConsoleWarningEmitter;

impl WarningEmitterIO for ConsoleWarningEmitter {
    fn emit_warning(&self, warning: Warning) {
        let buffer_writer = crate::cli::stderr_buffer_writer();
        let mut buffer = buffer_writer.buffer();
        warning.pretty(&mut buffer);
        buffer_writer
            .print(&buffer)
            .expect("Writing warning to stderr");
    }
}
