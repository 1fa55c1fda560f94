//! Turns a command's parameter line into typed arguments.
//!
//! Every reader consumes exactly one line and either yields a value of the
//! exact shape the command needs or a [`CommandError`] describing the
//! mismatch. A missing line (end of input) is reported as zero arguments.

use std::sync::LazyLock;

use regex::Regex;

use crate::matrix::Rotation;
use super::error::{ArgumentKind, CommandError};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("number pattern is valid")
});

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+$").expect("integer pattern is valid"));

/// Parses tokens with `pattern` until the first malformed one. A token is
/// malformed if it doesn't match, doesn't parse or fails `accept`. Returns the
/// parsed values and whether every token was well formed.
fn scan<T: std::str::FromStr>(line: &str, pattern: &Regex, accept: fn(&T) -> bool) -> (Vec<T>, bool) {
    let mut values = vec![];

    for token in line.split_whitespace() {
        match token.parse::<T>() {
            Ok(value) if pattern.is_match(token) && accept(&value) => values.push(value),
            _ => return (values, false),
        }
    }

    (values, true)
}

// 1e39 matches the pattern but overflows f32
fn is_finite(value: &f32) -> bool {
    value.is_finite()
}

fn exactly<T, const N: usize>(
    values: Vec<T>,
    command: &'static str,
    kind: ArgumentKind,
) -> Result<[T; N], CommandError> {
    let found = values.len();
    <[T; N]>::try_from(values).map_err(|_| CommandError::ArgumentCount { command, expected: N, found, kind })
}

/// Reads exactly `N` decimal numbers.
pub fn parse_numbers<const N: usize>(command: &'static str, line: Option<&str>) -> Result<[f32; N], CommandError> {
    let (values, well_formed) = line.map(|line| scan::<f32>(line, &NUMBER, is_finite)).unwrap_or_default();

    if !well_formed {
        return Err(CommandError::ArgumentCount { command, expected: N, found: values.len(), kind: ArgumentKind::Double });
    }

    exactly(values, command, ArgumentKind::Double)
}

/// Reads exactly `N` integers.
pub fn parse_integers<const N: usize>(command: &'static str, line: Option<&str>) -> Result<[i32; N], CommandError> {
    let (values, well_formed) = line.map(|line| scan::<i32>(line, &INTEGER, |_| true)).unwrap_or_default();

    if !well_formed {
        return Err(CommandError::ArgumentCount { command, expected: N, found: values.len(), kind: ArgumentKind::Int });
    }

    exactly(values, command, ArgumentKind::Int)
}

/// Reads `<axis> <degrees>` where the axis is x, y or z in either case.
pub fn parse_rotation(line: Option<&str>) -> Result<(Rotation, f32), CommandError> {
    let tokens: Vec<&str> = line.map(|line| line.split_whitespace().collect()).unwrap_or_default();

    let count_error = |found| CommandError::ArgumentCount {
        command: "rotate",
        expected: 2,
        found,
        kind: ArgumentKind::AxisAndAngle,
    };

    let [axis, degrees] = tokens.as_slice() else {
        return Err(count_error(tokens.len()));
    };

    let degrees = match degrees.parse::<f32>() {
        Ok(value) if NUMBER.is_match(degrees) && is_finite(&value) => value,
        _ => return Err(count_error(1)),
    };

    let axis = match axis.to_lowercase().as_str() {
        "x" => Rotation::X,
        "y" => Rotation::Y,
        "z" => Rotation::Z,
        _ => return Err(CommandError::InvalidAxis(axis.to_string())),
    };

    Ok((axis, degrees))
}

/// Reads the first token of the line as a file name.
pub fn parse_file_name(line: Option<&str>) -> Result<String, CommandError> {
    line.and_then(|line| line.split_whitespace().next())
        .map(str::to_string)
        .ok_or(CommandError::MissingFileName)
}
