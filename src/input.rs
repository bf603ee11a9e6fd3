//! Purpose: Turn `sum` command input (argument, file, or stdin) into a value sequence.
//! Exports: `InputSource`, `read_values`, `values_from_str`.
//! Role: Input decoding used by the CLI; keeps source selection out of dispatch.
//! Invariants: A single top-level JSON array yields its elements in order.
//! Invariants: Any other input is read as a whitespace-separated stream of JSON values.
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use safesum::api::{Error, ErrorKind};
use serde_json::Value;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn select(inline: Option<String>, file: Option<PathBuf>) -> Result<Self, Error> {
        match (inline, file) {
            (Some(_), Some(_)) => Err(Error::new(ErrorKind::Usage)
                .with_message("values and --file cannot be combined")
                .with_hint("Pass a JSON array inline, or use --file, or pipe it on stdin.")),
            (Some(text), None) if text == "-" => Ok(Self::Stdin),
            (Some(text), None) => Ok(Self::Inline(text)),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => Ok(Self::Stdin),
        }
    }
}

fn io_error(err: io::Error, message: &str) -> Error {
    Error::new(ErrorKind::Io)
        .with_message(message)
        .with_source(err)
}

pub fn read_values(source: &InputSource) -> Result<Vec<Value>, Error> {
    match source {
        InputSource::Inline(text) => values_from_str(text),
        InputSource::File(path) => values_from_str(&read_file(path)?),
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| io_error(err, "failed to read stdin"))?;
            values_from_str(&text)
        }
    }
}

fn read_file(path: &Path) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|err| {
        let message = format!("failed to read {}", path.display());
        io_error(err, &message)
    })
}

pub fn values_from_str(text: &str) -> Result<Vec<Value>, Error> {
    let mut values = Vec::new();
    for item in serde_json::Deserializer::from_str(text).into_iter::<Value>() {
        let value = item.map_err(|err| {
            Error::new(ErrorKind::Usage)
                .with_message(format!("invalid JSON input at line {}", err.line()))
                .with_hint("Provide a JSON array such as '[2, 6, 12, true]'.")
                .with_source(err)
        })?;
        values.push(value);
    }

    if let [Value::Array(items)] = values.as_mut_slice() {
        return Ok(std::mem::take(items));
    }
    Ok(values)
}
