//! Interactive prompts
//!
//! One blocking, line-buffered prompt at a time. The reader and writer are
//! owned by a `Prompter` so the interactive session is a scoped value handed
//! through the run, not ambient global state; tests drive it with in-memory
//! buffers.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    /// Prompter over the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question`, read one line, and return it trimmed.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Yes/no question where an empty reply means yes.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(question)?.to_lowercase();
        Ok(answer.is_empty() || answer == "y" || answer == "yes")
    }
}
