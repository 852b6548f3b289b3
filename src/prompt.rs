use console::Term;
use std::io::{self, BufRead};

/// Asks on the terminal for inputs that were not passed as flags.
///
/// Prompts go to stderr when stdout carries a JSON document.
pub struct Prompter {
    term: Term,
    prompted: bool,
}

impl Prompter {
    pub fn new(json: bool) -> Self {
        let term = if json { Term::stderr() } else { Term::stdout() };
        Self {
            term,
            prompted: false,
        }
    }

    pub fn required(&mut self, given: Option<String>, prompt: &str) -> io::Result<String> {
        match given {
            Some(value) => Ok(value),
            None => {
                self.prompted = true;
                self.ask(prompt)
            }
        }
    }

    /// Only asks once the run has already become interactive.
    pub fn optional(&mut self, given: Option<String>, prompt: &str) -> io::Result<Option<String>> {
        if given.is_some() || !self.prompted {
            return Ok(given);
        }
        let answer = self.ask(prompt)?;
        Ok(Some(answer).filter(|a| !a.is_empty()))
    }

    fn ask(&self, prompt: &str) -> io::Result<String> {
        self.term.write_str(prompt)?;
        self.term.flush()?;

        let line = if self.term.features().is_attended() {
            self.term.read_line()?
        } else {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        };
        Ok(line.trim().to_string())
    }
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new(false)
    }
}
