use std::io::{BufRead, Write};

use crate::interpreter::{
    environment::Environment,
    evaluator::core::eval_program,
    lexer::lex,
    parser::statement::parse_program,
    value::core::Value,
};

/// The prompt printed before each line of input.
const PROMPT: &str = ">> ";

/// Runs the read-eval-print loop until the input ends.
///
/// Each non-empty line is lexed and parsed on its own. When the parser
/// collected errors, they are listed and the line is not evaluated.
/// Otherwise the line runs under an environment that persists for the whole
/// session, so `let` bindings from earlier lines stay visible. Results are
/// printed in their inspect form; statements without a value (`let`) and
/// null results print nothing. Runtime errors are printed in place of a
/// result and do not end the session.
///
/// # Parameters
/// - `input`: Line source, usually standard input.
/// - `output`: Sink for prompts, results and errors.
///
/// # Errors
/// Returns an error only when reading or writing fails; everything the
/// interpreted program does wrong is reported through `output`.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    let env = Environment::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        if line.trim().is_empty() {
            continue;
        }

        let tokens = lex(&line);
        let (program, errors) = parse_program(&mut tokens.iter().peekable());

        if !errors.is_empty() {
            writeln!(output, "parser errors:")?;
            for error in &errors {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Some(value)) if value != Value::Null => writeln!(output, "{value}")?,
            Ok(_) => {},
            Err(error) => writeln!(output, "{error}")?,
        }
    }
}
