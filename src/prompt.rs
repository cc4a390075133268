//! Line-oriented prompts for the interactive CLI.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::resolver::Candidate;

/// Reads answers from `input`, writes questions to `output`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and return the trimmed answer. `None` on end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for a person's name.
    pub fn ask_name(&mut self) -> Result<Option<String>> {
        self.ask("Name: ")
    }

    /// List ambiguous candidates and ask which id was meant.
    ///
    /// I/O failures count as declining.
    pub fn choose_candidate(&mut self, name: &str, candidates: &[Candidate]) -> Option<String> {
        if let Err(e) = self.list_candidates(name, candidates) {
            log::warn!("Failed to write candidates: {}", e);
            return None;
        }
        match self.ask("Intended Person ID: ") {
            Ok(answer) => answer.filter(|a| !a.is_empty()),
            Err(e) => {
                log::warn!("Failed to read candidate choice: {}", e);
                None
            }
        }
    }

    fn list_candidates(&mut self, name: &str, candidates: &[Candidate]) -> Result<()> {
        writeln!(self.output, "Which '{}'?", name)?;
        for c in candidates {
            let birth = c.birth.map(|b| b.to_string()).unwrap_or_default();
            writeln!(self.output, "ID: {}, Name: {}, Birth: {}", c.id, c.name, birth)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}
