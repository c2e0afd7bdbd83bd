use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use expr_core::runner::{prelude::Outcome, run_source};

use crate::ConsoleWarningEmitter;

const PROMPT: &str = ">> ";

// Each submitted line is a full run against a fresh store; statements on
// one line can still be chained with `;`.
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
                let outcome = run_source(
                    PathBuf::from("<repl>"),
                    &input,
                    Rc::new(ConsoleWarningEmitter),
                );

                match outcome {
                    Outcome::Ok(run) => {
                        if !run.output.is_empty() {
                            print!("{}", run.output);
                        }

                        for (name, value) in run.env.bindings() {
                            println!("{name} = {value}");
                        }
                    },
                    Outcome::PartialFailure(_, error) => {
                        let buf_writer = crate::cli::stderr_buffer_writer();
                        let mut buf = buf_writer.buffer();

                        error.pretty(&mut buf);
                        buf_writer
                            .print(&buf)
                            .expect("Writing error to stderr");
                    }
                }
            }
        }
    }
}
