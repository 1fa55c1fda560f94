use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

use super::error::ScriptError;

/// Streams the meaningful lines of a script.
///
/// Blank lines and comments (`#` or `//` at the start of a line) are skipped
/// and the trailing newline is stripped. A carriage return anywhere in a line
/// is reported once as [`ScriptError::LineEnding`], after which the reader is
/// exhausted.
pub struct ScriptReader {
    source: Box<dyn BufRead>,
    line_number: usize,
    finished: bool,
}

impl ScriptReader {
    pub fn new<R: BufRead + 'static>(source: R) -> Self {
        Self {
            source: Box::new(source),
            line_number: 0,
            finished: false,
        }
    }

    /// Opens `path`, where `stdin` or `-` selects standard input.
    pub fn open(path: &str) -> Result<Self, ScriptError> {
        if path == "stdin" || path == "-" {
            return Ok(Self::new(BufReader::new(io::stdin())));
        }

        let file = File::open(path).map_err(|source| ScriptError::Open { path: path.to_string(), source })?;
        Ok(Self::new(BufReader::new(file)))
    }

    fn read_raw_line(&mut self) -> Result<Option<Vec<u8>>, ScriptError> {
        let mut buffer = vec![];
        let bytes = self.source.read_until(b'\n', &mut buffer).map_err(ScriptError::Read)?;

        if bytes == 0 {
            return Ok(None);
        }

        self.line_number += 1;
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }

        Ok(Some(buffer))
    }
}

fn is_skipped(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#') || line.starts_with("//")
}

impl Iterator for ScriptReader {
    type Item = Result<String, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let raw = match self.read_raw_line() {
                Ok(Some(raw)) => raw,
                Ok(None) => break,
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            };

            if raw.contains(&b'\r') {
                self.finished = true;
                return Some(Err(ScriptError::LineEnding { line: self.line_number }));
            }

            let line = String::from_utf8_lossy(&raw).into_owned();
            if !is_skipped(&line) {
                return Some(Ok(line));
            }
        }

        self.finished = true;
        None
    }
}
