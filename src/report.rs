use console::{style, Term};
use std::cell::RefCell;
use std::fmt::Display;
use std::io;

/// Console sink for run diagnostics.
///
/// Diagnostics go to stdout, except when stdout carries a JSON document.
/// The first failed write is kept and handed back by [`Reporter::finish`].
pub struct Reporter {
    term: Term,
    write_error: RefCell<Option<io::Error>>,
}

impl Reporter {
    pub fn new(json: bool) -> Self {
        let term = if json { Term::stderr() } else { Term::stdout() };
        Self {
            term,
            write_error: RefCell::new(None),
        }
    }

    pub fn warn(&self, msg: impl Display) {
        self.line(style(msg).yellow().to_string());
    }

    pub fn error(&self, msg: impl Display) {
        self.line(style(msg).red().bold().to_string());
    }

    pub fn success(&self, msg: impl Display) {
        self.line(style(msg).green().to_string());
    }

    fn line(&self, text: String) {
        if let Err(err) = self.term.write_line(&text) {
            self.write_error.borrow_mut().get_or_insert(err);
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.write_error.into_inner() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(false)
    }
}
