use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum ErrorKind {
    Internal,
    Usage,
    NotNumericText,
    WrongArgumentType,
    UnsummableElement,
    OutOfRange,
    Io,
}

impl ErrorKind {
    /// Default diagnostic text for the recoverable kinds.
    pub fn notice_message(self) -> Option<&'static str> {
        match self {
            ErrorKind::NotNumericText => Some("Input a numeric string!"),
            ErrorKind::WrongArgumentType => Some("Wrong argument type!"),
            ErrorKind::UnsummableElement => {
                Some("List contains a non integer type. Sum will skip this element.")
            }
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    hint: Option<String>,
    index: Option<usize>,
    type_name: Option<&'static str>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            hint: None,
            index: None,
            type_name: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_type_name(mut self, type_name: &'static str) -> Self {
        self.type_name = Some(type_name);
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = self.message.as_deref().or(self.kind.notice_message()) {
            write!(f, ": {message}")?;
        }
        if let Some(index) = self.index {
            write!(f, " (index: {index})")?;
        }
        if let Some(type_name) = self.type_name {
            write!(f, " (type: {type_name})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Internal => 1,
        ErrorKind::Usage => 2,
        ErrorKind::NotNumericText => 3,
        ErrorKind::WrongArgumentType => 4,
        ErrorKind::UnsummableElement => 5,
        ErrorKind::OutOfRange => 6,
        ErrorKind::Io => 7,
    }
}
