use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that end the whole run.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to open script '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Please use a script file with Unix-style (\\n) line endings (line {line})")]
    LineEnding { line: usize },

    #[error("failed to read script: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write trace output: {0}")]
    Trace(#[source] io::Error),
}

/// The kind of token a command expects on its parameter line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgumentKind {
    Double,
    Int,
    AxisAndAngle,
}

/// Errors that skip a single command. Each one renders as the diagnostic
/// line written to the trace.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Error: '{command}' requires {expected} arguments {kind_text}, found {found}", kind_text = describe(.kind))]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        found: usize,
        kind: ArgumentKind,
    },

    #[error("Error: {0} is not a valid axis")]
    InvalidAxis(String),

    #[error("Error: 'pop' cannot remove the base coordinate system")]
    StackUnderflow,

    #[error("Error: 'save' requires a filename, none given")]
    MissingFileName,

    #[error("Error: unrecognized command '{0}'")]
    UnknownCommand(String),

    #[error("Error: could not write '{}': {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

fn describe(kind: &ArgumentKind) -> &'static str {
    match kind {
        ArgumentKind::Double => "of type double",
        ArgumentKind::Int => "of type int",
        ArgumentKind::AxisAndAngle => "(axis and angle)",
    }
}
