use crate::drive::Utility;
use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RustLtouError>;

#[derive(Error, Debug)]
pub enum RustLtouError {
    #[error("can not stat specified device file {path}")]
    DeviceStat {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("a no rewind tape device is required: {path}")]
    NoRewindRequired { path: String },

    #[error("this os is not supported: {0}")]
    UnsupportedPlatform(String),

    #[error("can not find {0}")]
    UtilityNotFound(Utility),

    #[error("failed to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}", exit_code_text(.code))]
    ExitStatus {
        program: String,
        code: Option<i32>,
        output: String,
    },

    #[error("{program} timed out")]
    TimedOut { program: String },

    #[error("{program} was cancelled")]
    Cancelled { program: String },

    #[error("field missing: {0}")]
    FieldMissing(String),

    #[error("invalid numeric value {value:?}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("no data cartridge or not ready yet")]
    NoDataCartridge {
        #[source]
        source: Option<Box<RustLtouError>>,
    },

    #[error("{context}")]
    Context {
        context: String,
        #[source]
        source: Box<RustLtouError>,
    },

    #[error("{}", join_messages(.0))]
    Composite(Vec<RustLtouError>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parameter validation error: {0}")]
    ParameterValidation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Broad classification of a failure, looking through `Context` wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Environment,
    Execution,
    Parse,
    Precondition,
    Composite,
    Usage,
    Output,
}

impl RustLtouError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    pub fn parameter_validation<T: Into<String>>(msg: T) -> Self {
        Self::ParameterValidation(msg.into())
    }

    pub fn field_missing<T: Into<String>>(field: T) -> Self {
        Self::FieldMissing(field.into())
    }

    /// Wrap `self` with a higher level message, keeping it as the source.
    pub fn wrap<T: Into<String>>(self, context: T) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Join independent failures. Returns `None` for an empty list and the
    /// error itself when there is only one.
    pub fn join(mut errors: Vec<RustLtouError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Composite(errors)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DeviceStat { .. }
            | Self::NoRewindRequired { .. }
            | Self::UnsupportedPlatform(_)
            | Self::UtilityNotFound(_) => ErrorKind::Environment,
            Self::Launch { .. }
            | Self::ExitStatus { .. }
            | Self::TimedOut { .. }
            | Self::Cancelled { .. } => ErrorKind::Execution,
            Self::FieldMissing(_) | Self::InvalidNumber { .. } => ErrorKind::Parse,
            Self::NoDataCartridge { .. } => ErrorKind::Precondition,
            Self::Context { source, .. } => source.kind(),
            Self::Composite(_) => ErrorKind::Composite,
            Self::Config(_) | Self::ParameterValidation(_) => ErrorKind::Usage,
            Self::Serialization(_) => ErrorKind::Output,
        }
    }

    /// Innermost error of a `Context` chain.
    pub fn root_cause(&self) -> &RustLtouError {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            Self::NoDataCartridge {
                source: Some(source),
            } => source.root_cause(),
            other => other,
        }
    }

    /// Whether `context` appears anywhere in the wrapping chain.
    pub fn has_context(&self, context: &str) -> bool {
        match self {
            Self::Context {
                context: ctx,
                source,
            } => ctx == context || source.has_context(context),
            Self::NoDataCartridge {
                source: Some(source),
            } => source.has_context(context),
            _ => false,
        }
    }

    /// Full message including every cause, joined with `: `.
    pub fn report(&self) -> String {
        let mut text = self.to_string();
        let mut current: Option<&(dyn std::error::Error + 'static)> =
            std::error::Error::source(self);
        while let Some(cause) = current {
            text.push_str(": ");
            text.push_str(&cause.to_string());
            current = cause.source();
        }
        text
    }
}

fn exit_code_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "a signal".to_string(),
    }
}

fn join_messages(errors: &[RustLtouError]) -> String {
    errors
        .iter()
        .map(RustLtouError::report)
        .collect::<Vec<_>>()
        .join("; ")
}

pub trait ResultExt<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| e.wrap(context))
    }
}

/// A value that may be only partially resolved, together with every failure
/// met while producing it.
#[derive(Debug)]
pub struct Partial<T> {
    pub value: T,
    pub errors: Vec<RustLtouError>,
}

impl<T> Partial<T> {
    pub fn complete(value: T) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    pub fn new(value: T, errors: Vec<RustLtouError>) -> Self {
        Self { value, errors }
    }

    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into the value and the joined error, if any.
    pub fn into_parts(self) -> (T, Option<RustLtouError>) {
        (self.value, RustLtouError::join(self.errors))
    }

    /// Discard the partial value when anything failed.
    pub fn into_result(self) -> Result<T> {
        match RustLtouError::join(self.errors) {
            None => Ok(self.value),
            Some(err) => Err(err),
        }
    }
}
