//! Newline-delimited JSON action logs.
//!
//! One wire action per line. Blank lines are skipped. Errors carry the
//! 1-based line number so a bad entry can be found in the file.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::schools::{ActionDecodeError, SchoolsAction};

#[derive(Debug, Error)]
pub enum ActionLogError {
    #[error("Failed to open action log '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid action on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: ActionDecodeError,
    },
}

impl ActionLogError {
    /// Line the error refers to, if it came from a specific entry.
    pub fn line(&self) -> Option<usize> {
        match self {
            ActionLogError::Open { .. } => None,
            ActionLogError::Read { line, .. } | ActionLogError::Decode { line, .. } => Some(*line),
        }
    }
}

/// Iterator over the actions in a log.
pub struct ActionLog<R> {
    lines: Lines<R>,
    line: usize,
}

impl ActionLog<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, ActionLogError> {
        let file = File::open(path).map_err(|e| ActionLogError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ActionLog<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for ActionLog<R> {
    type Item = Result<SchoolsAction, ActionLogError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.next()?;
            self.line += 1;
            let line = self.line;

            let text = match text {
                Ok(text) => text,
                Err(source) => return Some(Err(ActionLogError::Read { line, source })),
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }

            return Some(
                SchoolsAction::from_json_str(trimmed)
                    .map_err(|source| ActionLogError::Decode { line, source }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn skips_blank_lines_and_counts_them() {
        let input = "\n{\"type\": \"LOGOUT\"}\n\n{\"type\": \"GET_ALL_SCHOOLS_SUCCESS\"}\n";
        let mut log = ActionLog::new(Cursor::new(input));

        let first = log.next().unwrap().unwrap();
        assert_eq!(first.tag(), "LOGOUT");

        let err = log.next().unwrap().unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert!(log.next().is_none());
    }

    #[test]
    fn malformed_json_reports_line() {
        let mut log = ActionLog::new(Cursor::new("not json"));
        let err = log.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            ActionLogError::Decode {
                line: 1,
                source: ActionDecodeError::Json(_)
            }
        ));
    }
}
